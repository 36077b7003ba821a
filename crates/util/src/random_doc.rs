use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use serde_json::{Map, Value};
use std::sync::{Arc, Mutex};

/// Bounds for generated documents.
#[derive(Debug, Clone)]
pub struct DocGenOptions {
    /// Maximum container nesting below the root mapping.
    pub max_depth: usize,
    /// Maximum entries per container.
    pub max_width: usize,
}

impl Default for DocGenOptions {
    fn default() -> Self {
        Self {
            max_depth: 4,
            max_width: 6,
        }
    }
}

/// A seeded generator of random JSON documents.
///
/// Uses the xoshiro256** PRNG so a fixed seed reproduces the same
/// documents, which keeps randomized store tests replayable from a logged
/// seed. Generated mapping keys are short, lowercase, and dot-free, so
/// every node in a generated document is addressable by a dotted path.
///
/// # Examples
///
/// ```
/// use databag_util::random_doc::RandomDoc;
///
/// let docs = RandomDoc::new(Some([7u8; 32]));
/// let doc = docs.document();
/// assert!(doc.is_object());
/// ```
pub struct RandomDoc {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Arc<Mutex<Xoshiro256StarStar>>,
    options: DocGenOptions,
}

impl RandomDoc {
    /// Create a generator with an optional seed.
    ///
    /// If no seed is provided, a random seed is drawn from `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        Self::with_options(seed, DocGenOptions::default())
    }

    /// Create a generator with explicit document bounds.
    pub fn with_options(seed: Option<[u8; 32]>, options: DocGenOptions) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        let rng = Xoshiro256StarStar::from_seed(seed);

        Self {
            seed,
            rng: Arc::new(Mutex::new(rng)),
            options,
        }
    }

    /// Generate a document with a mapping at the root.
    pub fn document(&self) -> Value {
        Value::Object(self.mapping(self.options.max_depth))
    }

    /// Generate one value nested at most `depth` container levels deep.
    pub fn value(&self, depth: usize) -> Value {
        if depth == 0 {
            return self.scalar();
        }
        match self.roll(10) {
            0 | 1 => Value::Object(self.mapping(depth - 1)),
            2 | 3 => Value::Array(self.list(depth - 1)),
            _ => self.scalar(),
        }
    }

    /// Generate a random scalar: null, bool, integer, float, or string.
    pub fn scalar(&self) -> Value {
        match self.roll(10) {
            0 => Value::Null,
            1 | 2 => Value::Bool(self.roll(2) == 0),
            3 | 4 | 5 => Value::from(self.roll(2001) as i64 - 1000),
            6 => Value::from(self.roll(1000) as f64 / 8.0),
            _ => Value::String(self.word()),
        }
    }

    fn mapping(&self, depth: usize) -> Map<String, Value> {
        let mut map = Map::new();
        for _ in 0..self.roll(self.options.max_width as u64 + 1) {
            map.insert(self.word(), self.value(depth));
        }
        map
    }

    fn list(&self, depth: usize) -> Vec<Value> {
        (0..self.roll(self.options.max_width as u64 + 1))
            .map(|_| self.value(depth))
            .collect()
    }

    // Short lowercase key material; never contains '.', never empty.
    fn word(&self) -> String {
        const CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
        let len = 1 + self.roll(7) as usize;
        (0..len)
            .map(|_| CHARS[self.roll(CHARS.len() as u64) as usize] as char)
            .collect()
    }

    fn roll(&self, bound: u64) -> u64 {
        let mut rng = self.rng.lock().unwrap();
        rng.gen_range(0..bound)
    }
}
