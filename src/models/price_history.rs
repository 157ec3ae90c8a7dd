use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::VecDeque;

/// One chart sample: a price and its wall-clock label ("HH:MM").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub price: f64,
    pub time: String,
}

impl PricePoint {
    pub fn new(price: f64, time: impl Into<String>) -> Self {
        Self {
            price,
            time: time.into(),
        }
    }
}

/// Fixed-capacity sliding window of price samples, oldest first.
/// Once full, every push displaces the oldest sample so the length never changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceHistory {
    samples: VecDeque<PricePoint>,
    capacity: usize,
}

impl PriceHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Window sized to exactly the given samples.
    pub fn from_samples(samples: Vec<PricePoint>) -> Self {
        let capacity = samples.len();
        Self {
            samples: samples.into(),
            capacity,
        }
    }

    pub fn push(&mut self, point: PricePoint) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(point);
    }

    pub fn oldest(&self) -> Option<&PricePoint> {
        self.samples.front()
    }

    pub fn latest(&self) -> Option<&PricePoint> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &PricePoint> {
        self.samples.iter()
    }

    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|p| p.price)
    }
}

// Serialized as a plain array of samples; the capacity is implied by its length.
impl Serialize for PriceHistory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.samples.iter())
    }
}

impl<'de> Deserialize<'de> for PriceHistory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let samples = Vec::<PricePoint>::deserialize(deserializer)?;
        Ok(Self::from_samples(samples))
    }
}
