pub mod chart;
pub mod exporter;
pub mod generate;

use rand::Rng;

use chart::Chart;
use generate::{random_beat_sequence, random_chart_name};

pub const DEFAULT_SOUND_FILE: &str = "windless-slopes.ogg";
pub const DEFAULT_BEAT_DURATION_SECS: f32 = 0.3;
pub const DEFAULT_LEAD_TIME_SECS: f32 = 1.5;

/// Metadata shared by every chart a generator builds. Defaults match the
/// fixture charts the game ships with.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub sound_file: String,
    pub beat_duration_secs: f32,
    pub lead_time_secs: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            sound_file: DEFAULT_SOUND_FILE.to_string(),
            beat_duration_secs: DEFAULT_BEAT_DURATION_SECS,
            lead_time_secs: DEFAULT_LEAD_TIME_SECS,
        }
    }
}

/// Builds randomized charts. Randomness comes in through the caller's `Rng`
/// so seeded runs reproduce their output exactly.
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Generator { config }
    }

    /// Build one chart with a fresh random name and `beat_count` beats.
    pub fn generate<R: Rng>(&self, rng: &mut R, beat_count: u32) -> Chart {
        let chart_name = random_chart_name(rng);
        log::debug!("Building chart '{}' with {} beats", chart_name, beat_count);

        Chart {
            chart_name,
            sound_file: self.config.sound_file.clone(),
            beat_duration_secs: self.config.beat_duration_secs,
            lead_time_secs: self.config.lead_time_secs,
            beats: random_beat_sequence(rng, beat_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generator_config_default() {
        let config = GeneratorConfig::default();
        assert_eq!(config.sound_file, "windless-slopes.ogg");
        assert_eq!(config.beat_duration_secs, 0.3);
        assert_eq!(config.lead_time_secs, 1.5);
    }

    #[test]
    fn test_generate_matches_requested_beat_count() {
        let generator = Generator::new(GeneratorConfig::default());
        let mut rng = StdRng::seed_from_u64(1);
        for n in [0u32, 1, 3, 48] {
            let chart = generator.generate(&mut rng, n);
            assert_eq!(chart.beats.len(), n as usize);
        }
    }

    #[test]
    fn test_generate_uses_config_metadata() {
        let generator = Generator::new(GeneratorConfig {
            sound_file: "other-song.ogg".to_string(),
            beat_duration_secs: 0.5,
            lead_time_secs: 2.0,
        });
        let chart = generator.generate(&mut StdRng::seed_from_u64(2), 4);
        assert_eq!(chart.sound_file, "other-song.ogg");
        assert_eq!(chart.beat_duration_secs, 0.5);
        assert_eq!(chart.lead_time_secs, 2.0);
    }

    #[test]
    fn test_same_seed_reproduces_chart() {
        let generator = Generator::new(GeneratorConfig::default());
        let a = generator.generate(&mut StdRng::seed_from_u64(99), 16);
        let b = generator.generate(&mut StdRng::seed_from_u64(99), 16);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_different_seeds_diverge() {
        let generator = Generator::new(GeneratorConfig::default());
        let a = generator.generate(&mut StdRng::seed_from_u64(100), 16);
        let b = generator.generate(&mut StdRng::seed_from_u64(101), 16);
        assert_ne!(a.chart_name, b.chart_name);
    }
}
