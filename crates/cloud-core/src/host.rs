use rand::Rng;

use crate::cloud::CloudCollection;
use crate::config::GenerationParameters;
use crate::error::ParameterError;
use crate::generator::CloudGenerator;

/// Holds the cloud currently attached to the scene.
///
/// There is at most one attached collection. A new one is only attached after
/// the previous one has been detached, so the visible instance count always
/// equals the count of the latest successful generation.
pub struct CloudHost {
    generator: CloudGenerator,
    current: Option<CloudCollection>,
    generation: u64,
}

impl CloudHost {
    pub fn new() -> Self {
        Self {
            generator: CloudGenerator::new(),
            current: None,
            generation: 0,
        }
    }

    pub fn current(&self) -> Option<&CloudCollection> {
        self.current.as_ref()
    }

    /// Number of successful attachments so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn visible_instances(&self) -> usize {
        self.current.as_ref().map_or(0, CloudCollection::len)
    }

    /// Detach the current cloud, then attach `cloud`. Returns the old one.
    pub fn replace(&mut self, cloud: CloudCollection) -> Option<CloudCollection> {
        let previous = self.detach();
        self.current = Some(cloud);
        self.generation += 1;
        previous
    }

    pub fn detach(&mut self) -> Option<CloudCollection> {
        self.current.take()
    }

    /// Regenerate from a parameter snapshot and swap the result in.
    ///
    /// Count and intensity are clamped first. If anything is still invalid the
    /// previous cloud stays attached and the error is returned.
    pub fn regenerate(&mut self, params: &GenerationParameters) -> Result<usize, ParameterError> {
        self.regenerate_with_rng(params, &mut rand::thread_rng())
    }

    pub fn regenerate_with_rng<R: Rng + ?Sized>(
        &mut self,
        params: &GenerationParameters,
        rng: &mut R,
    ) -> Result<usize, ParameterError> {
        let snapshot = params.clamped();
        if let Err(err) = snapshot.validate() {
            tracing::warn!(%err, "keeping previous cloud");
            return Err(err);
        }

        let cloud = self.generator.generate_with_rng(&snapshot, rng);
        let count = cloud.len();
        self.replace(cloud);
        Ok(count)
    }
}

impl Default for CloudHost {
    fn default() -> Self {
        Self::new()
    }
}
