use serde::{Deserialize, Serialize};

use crate::core::Sample;
use crate::error::{GraphError, GraphResult};

/// Ordered samples of one function.
///
/// Order defines path connectivity and is expected to be ascending by `x`;
/// the mapper reads the X range from the first and last sample without
/// scanning. Every sample is finite.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    pub fn new(samples: Vec<Sample>) -> GraphResult<Self> {
        if let Some(index) = samples.iter().position(|sample| !sample.is_finite()) {
            return Err(GraphError::InvalidData(format!(
                "sample #{index} must have finite coordinates"
            )));
        }
        Ok(Self { samples })
    }

    pub fn from_pairs<I>(pairs: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self::new(pairs.into_iter().map(Sample::from).collect())
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<Sample> {
        self.samples.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<Sample> {
        self.samples.last().copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Sample> {
        self.samples.iter()
    }

    /// Returns `true` when sample X values never decrease.
    #[must_use]
    pub fn is_sorted_by_x(&self) -> bool {
        self.samples.windows(2).all(|pair| pair[0].x <= pair[1].x)
    }

    #[must_use]
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

impl<'de> Deserialize<'de> for Series {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let samples = Vec::<Sample>::deserialize(deserializer)?;
        Self::new(samples).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
