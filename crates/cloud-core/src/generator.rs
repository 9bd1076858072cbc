use rand::Rng;

use crate::cloud::CloudCollection;
use crate::config::GenerationParameters;
use crate::geometry::GeometrySet;
use crate::instance::InstanceTransform;
use crate::math::draw_factor;

/// Builds clouds from parameter snapshots.
///
/// Geometry for each primitive kind is built once here and shared by every
/// collection this generator produces.
pub struct CloudGenerator {
    geometries: GeometrySet,
}

impl CloudGenerator {
    pub fn new() -> Self {
        Self {
            geometries: GeometrySet::new(),
        }
    }

    /// Generate with the thread-local RNG. Not reproducible unless
    /// `random_intensity` is zero.
    pub fn generate(&self, params: &GenerationParameters) -> CloudCollection {
        self.generate_with_rng(params, &mut rand::thread_rng())
    }

    /// Generate drawing factors from `rng`.
    ///
    /// No validation happens here: a zero count yields an empty cloud and
    /// non-finite inputs yield non-finite transforms.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        params: &GenerationParameters,
        rng: &mut R,
    ) -> CloudCollection {
        let geometry = self.geometries.get(params.primitive_kind);

        let instances: Vec<InstanceTransform> = (0..params.count)
            .map(|i| {
                let factor = draw_factor(rng, params.random_intensity);
                InstanceTransform::from_factor(i, factor, params)
            })
            .collect();

        tracing::debug!(
            count = instances.len(),
            kind = params.primitive_kind.label(),
            "generated cloud"
        );

        CloudCollection::new(instances, geometry)
    }
}

impl Default for CloudGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot generation with a fresh generator.
pub fn generate(params: &GenerationParameters) -> CloudCollection {
    CloudGenerator::new().generate(params)
}
