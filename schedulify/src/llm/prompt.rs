//! Prompt composition for schedule generation.

use crate::models::Schedule;

/// Build the instruction sent to the generation service: the user's four
/// fixed times, the raw task text, and the request for a time/task list
/// that respects existing commitments.
pub fn compose_prompt(schedule: &Schedule, tasks: &str) -> String {
    format!(
        "My schedule for today is:\n\
         Wake up: {wake_up}\n\
         Lunch: {lunch}\n\
         Dinner: {dinner}\n\
         Sleep: {sleep}\n\
         \n\
         My tasks are:\n\
         \"{tasks}\"\n\
         \n\
         Please provide an optimized schedule that includes the new task, \
         while respecting the existing schedule as much as possible.\n\
         Output the schedule as a list of items, each with a time and a task.",
        wake_up = schedule.wake_up,
        lunch = schedule.lunch,
        dinner = schedule.dinner,
        sleep = schedule.sleep,
    )
}
