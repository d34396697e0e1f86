//! Project registry
//!
//! The project is the crate's entry point for the host runtime: an ordered
//! list of agents, each a character plus an optional async init hook. It is
//! constructed once at startup and read-only afterwards.

use crate::character::validate_character;
use crate::runtime::HostRuntime;
use crate::types::agent::Character;
use anyhow::Result;
use std::future::Future;
use std::pin::Pin;
use tracing::{error, info};

/// Async initialization hook invoked by the host runtime once per agent
pub type InitHook = Box<
    dyn for<'a> Fn(&'a dyn HostRuntime) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>
        + Send
        + Sync,
>;

/// One agent in the project: a character plus an optional init hook
pub struct ProjectAgent {
    /// Character configuration
    pub character: Character,
    /// Optional initialization hook
    pub init: Option<InitHook>,
}

impl ProjectAgent {
    /// Create an agent with no init hook
    pub fn new(character: Character) -> Self {
        ProjectAgent {
            character,
            init: None,
        }
    }

    /// Attach an init hook
    pub fn with_init(mut self, init: InitHook) -> Self {
        self.init = Some(init);
        self
    }
}

/// The project the host runtime loads at startup
#[derive(Default)]
pub struct Project {
    /// Agent configurations, in registration order
    pub agents: Vec<ProjectAgent>,
}

impl Project {
    /// Create a project from a list of agents
    pub fn new(agents: Vec<ProjectAgent>) -> Self {
        Project { agents }
    }

    /// Validate every character in the registry
    pub fn validate(&self) -> Result<()> {
        for agent in &self.agents {
            validate_character(&agent.character)?;
        }
        Ok(())
    }

    /// Run each agent's init hook.
    ///
    /// A failing hook is logged with the agent's identity and cause; it never
    /// prevents the remaining agents from initializing.
    pub async fn initialize(&self, runtime: &dyn HostRuntime) {
        for agent in &self.agents {
            let Some(init) = &agent.init else {
                continue;
            };
            match init(runtime).await {
                Ok(()) => {
                    info!(character = %agent.character.name, "agent initialized");
                }
                Err(err) => {
                    error!(
                        character = %agent.character.name,
                        error = %err,
                        "agent init hook failed"
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::CapabilitySet;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct NoopRuntime;

    #[async_trait]
    impl HostRuntime for NoopRuntime {
        async fn load_plugins(&self, identifiers: &[String]) -> Result<CapabilitySet> {
            Ok(CapabilitySet::new(identifiers.to_vec()))
        }

        async fn run_conversation_loop(
            &self,
            _character: &Character,
            _capabilities: CapabilitySet,
        ) -> Result<()> {
            Ok(())
        }
    }

    fn counting_hook(counter: Arc<AtomicUsize>) -> InitHook {
        Box::new(move |_runtime| {
            let counter = counter.clone();
            Box::pin(async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
        })
    }

    fn failing_hook() -> InitHook {
        Box::new(|_runtime| Box::pin(async { anyhow::bail!("boom") }))
    }

    fn test_character(name: &str) -> Character {
        Character {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_initialize_runs_all_hooks() {
        let counter = Arc::new(AtomicUsize::new(0));
        let project = Project::new(vec![
            ProjectAgent::new(test_character("A")).with_init(counting_hook(counter.clone())),
            ProjectAgent::new(test_character("B")).with_init(counting_hook(counter.clone())),
        ]);

        project.initialize(&NoopRuntime).await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_initialize_failure_does_not_block_siblings() {
        let counter = Arc::new(AtomicUsize::new(0));
        let project = Project::new(vec![
            ProjectAgent::new(test_character("Broken")).with_init(failing_hook()),
            ProjectAgent::new(test_character("Healthy")).with_init(counting_hook(counter.clone())),
        ]);

        project.initialize(&NoopRuntime).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_initialize_skips_agents_without_hook() {
        let project = Project::new(vec![ProjectAgent::new(test_character("Quiet"))]);

        // Must complete without touching the runtime
        project.initialize(&NoopRuntime).await;
    }
}
