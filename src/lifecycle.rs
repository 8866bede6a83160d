//! Host lifecycle hooks shared by jobs and tasks.

/// Hooks the scheduler calls around a job or task.
///
/// The reader has no external resources, so every hook defaults to a no-op.
/// Configuration is validated at `init`, which is a constructor on the
/// implementing types rather than part of this trait.
pub trait Lifecycle {
    fn prepare(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn post(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn destroy(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}
