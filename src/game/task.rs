//! Repair tasks and the task queue

use std::fmt;

use rand::seq::IndexedRandom;
use rand::Rng;

use super::queue::RingQueue;
use super::types::{
    BROKEN_COMPONENTS, BROKEN_SUFFIX, PART_TYPES, SUPPLIES_PER_TASK, SUPPLY_COUNT_RANGE,
};

/// Queue of repair jobs, front is the current task
pub type TaskQueue = RingQueue<Task>;

/// A part requirement of a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supply {
    pub part: String,
    pub count: u32,
}

/// One repair job: fix the named ship component using the listed supplies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub supplies: Vec<Supply>,
}

impl Task {
    pub fn new(name: &str, supplies: Vec<Supply>) -> Self {
        Self {
            name: name.to_string(),
            supplies,
        }
    }

    /// A task asking for distinct random part types in random amounts
    pub fn generate<R: Rng>(name: &str, rng: &mut R) -> Self {
        let supplies = PART_TYPES
            .choose_multiple(rng, SUPPLIES_PER_TASK)
            .map(|part| Supply {
                part: (*part).to_string(),
                count: rng.random_range(SUPPLY_COUNT_RANGE),
            })
            .collect();
        Self::new(name, supplies)
    }

    /// Label of the ship component this task repairs, before the repair
    pub fn broken_label(&self) -> String {
        format!("{}{}", self.name, BROKEN_SUFFIX)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Help Mario build Iron Man suit!")?;
        writeln!(f, "To make the {}, you need:", self.name)?;
        for supply in &self.supplies {
            writeln!(f, "{} {}", supply.count, supply.part)?;
        }
        Ok(())
    }
}

/// Queue one randomly supplied task per broken component, in repair order
pub fn generate_task_queue<R: Rng>(rng: &mut R) -> TaskQueue {
    let mut tasks = TaskQueue::new();
    for name in BROKEN_COMPONENTS {
        tasks.enqueue(Task::generate(name, rng));
    }
    tasks
}
