//! Resting place for [MeansOfDeath]


/// Counts how many deaths each "mean of death" (`MOD_ROCKET`, `MOD_TRIGGER_HURT`, ...) caused,
/// remembering the order in which they were first seen.\
/// IMPLEMENTATION NOTE: a `Vec` is used instead of a map as Quake 3 has only a few dozen means of death:
///                      linear searches are cheap and the insertion order comes for free.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MeansOfDeath {
    counts: Vec<(String, u32)>,
}

impl MeansOfDeath {

    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts for one more death by `mean_of_death`, returning the updated count
    pub fn increment(&mut self, mean_of_death: &str) -> u32 {
        let index = match self.counts.iter().position(|(name, _)| name == mean_of_death) {
            Some(index) => index,
            None => {
                self.counts.push((mean_of_death.to_owned(), 0));
                self.counts.len() - 1
            },
        };
        let (_, count) = &mut self.counts[index];
        *count += 1;
        *count
    }

    /// How many deaths `mean_of_death` caused -- `None` if it was never seen
    pub fn get(&self, mean_of_death: &str) -> Option<u32> {
        self.counts.iter()
            .find(|(name, _)| name == mean_of_death)
            .map(|(_, count)| *count)
    }

    /// The `(mean_of_death, count)` pairs, in the order they were first seen
    pub fn iter(&self) -> impl Iterator<Item=(&str, u32)> {
        self.counts.iter()
            .map(|(name, count)| (name.as_str(), *count))
    }

    /// The number of deaths, regardless of their means
    pub fn total(&self) -> u32 {
        self.counts.iter()
            .map(|(_, count)| count)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

}

impl<Name: Into<String>, const N: usize> From<[(Name, u32); N]> for MeansOfDeath {
    fn from(counts: [(Name, u32); N]) -> Self {
        Self {
            counts: counts.into_iter()
                .map(|(name, count)| (name.into(), count))
                .collect(),
        }
    }
}


/// Unit tests for the [means_of_death](super) module
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting() {
        let mut means_of_death = MeansOfDeath::new();
        assert!(means_of_death.is_empty(), "A new instance should have no deaths");
        assert_eq!(means_of_death.increment("MOD_TRIGGER_HURT"), 1);
        assert_eq!(means_of_death.increment("MOD_ROCKET_SPLASH"), 1);
        assert_eq!(means_of_death.increment("MOD_TRIGGER_HURT"), 2);
        assert_eq!(means_of_death.get("MOD_TRIGGER_HURT"), Some(2));
        assert_eq!(means_of_death.get("MOD_RAILGUN"), None);
        assert_eq!(means_of_death.len(), 2);
        assert_eq!(means_of_death.total(), 3);
    }

    /// Assures the order is the one in which the means of death were first seen -- not the alphabetical one
    #[test]
    fn insertion_order() {
        let mut means_of_death = MeansOfDeath::new();
        for mean_of_death in ["MOD_TRIGGER_HURT", "MOD_ROCKET_SPLASH", "MOD_FALLING", "MOD_ROCKET_SPLASH"] {
            means_of_death.increment(mean_of_death);
        }
        let observed: Vec<(&str, u32)> = means_of_death.iter().collect();
        assert_eq!(observed, vec![("MOD_TRIGGER_HURT", 1), ("MOD_ROCKET_SPLASH", 2), ("MOD_FALLING", 1)]);
        assert_eq!(means_of_death, MeansOfDeath::from([("MOD_TRIGGER_HURT", 1), ("MOD_ROCKET_SPLASH", 2), ("MOD_FALLING", 1)]));
    }
}
