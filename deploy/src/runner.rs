use tracing::info;
use crate::environment::RuntimeEnvironment;
use crate::error::Error;
use crate::tasks::hypercert_svg;

/// Every deployment task known to this workspace, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    HypercertSvg,
}

impl Task {
    pub const ALL: &'static [Task] = &[Task::HypercertSvg];

    pub fn id(&self) -> &'static str {
        match self {
            Task::HypercertSvg => hypercert_svg::ID,
        }
    }

    pub fn tags(&self) -> &'static [&'static str] {
        match self {
            Task::HypercertSvg => hypercert_svg::TAGS,
        }
    }

    /// Contract published by the task.
    pub fn contract(&self) -> &'static str {
        match self {
            Task::HypercertSvg => hypercert_svg::CONTRACT_NAME,
        }
    }

    pub async fn run<E: RuntimeEnvironment>(&self, env: &E) -> Result<(), Error> {
        let result = match self {
            Task::HypercertSvg => hypercert_svg::deploy(env).await,
        };
        result.map_err(|source| Error::Task { id: self.id(), source })
    }
}

/// Tasks matching any of `tags`. An empty request matches everything.
pub fn select<S: AsRef<str>>(tags: &[S]) -> Vec<Task> {
    Task::ALL
        .iter()
        .copied()
        .filter(|task| {
            tags.is_empty()
                || task.tags().iter().any(|t| tags.iter().any(|r| r.as_ref() == *t))
        })
        .collect()
}

/// Runs the selected tasks one after another and stops at the first failure.
pub async fn run_tagged<E, S>(env: &E, tags: &[S]) -> Result<Vec<&'static str>, Error>
where
    E: RuntimeEnvironment,
    S: AsRef<str>,
{
    let tasks = select(tags);
    info!("Selected tasks: {:?}", tasks.iter().map(Task::id).collect::<Vec<_>>());
    let mut ran = Vec::with_capacity(tasks.len());
    for task in tasks {
        info!("Running task {}", task.id());
        task.run(env).await?;
        ran.push(task.id());
    }
    Ok(ran)
}
