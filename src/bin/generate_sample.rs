use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Generate a synthetic variable-star catalog: one row per star, with two
/// correlated numeric relations (period–amplitude and temperature–magnitude)
/// worth exploring in the scatter browser.  A handful of cells are null to
/// exercise NaN handling.
fn main() {
    let mut rng = SimpleRng::new(42);
    let n_stars = 500;

    let classes = ["RR_Lyrae", "Delta_Scuti", "Cepheid"];

    let mut ids: Vec<i64> = Vec::with_capacity(n_stars);
    let mut periods: Vec<Option<f64>> = Vec::with_capacity(n_stars);
    let mut amplitudes: Vec<Option<f64>> = Vec::with_capacity(n_stars);
    let mut mean_mags: Vec<Option<f64>> = Vec::with_capacity(n_stars);
    let mut temps: Vec<Option<f64>> = Vec::with_capacity(n_stars);
    let mut class_col: Vec<String> = Vec::with_capacity(n_stars);

    for i in 0..n_stars {
        let class_idx = (rng.next_u64() % classes.len() as u64) as usize;
        let (base_period, base_amp, base_temp) = match class_idx {
            0 => (0.55, 0.8, 6500.0),
            1 => (0.08, 0.1, 7500.0),
            _ => (8.0, 1.0, 5500.0),
        };

        let period = (base_period * (1.0 + rng.gauss(0.0, 0.25))).abs();
        let amplitude = (base_amp * (1.0 + rng.gauss(0.0, 0.3))).abs();
        let temp = rng.gauss(base_temp, 250.0);
        // Brighter (lower magnitude) for longer periods, plus scatter.
        let mean_mag = 14.0 - 1.5 * period.log10() + rng.gauss(0.0, 0.4);

        ids.push(i as i64);
        // ~3% missing photometry
        periods.push((rng.next_f64() > 0.03).then_some(period));
        amplitudes.push((rng.next_f64() > 0.03).then_some(amplitude));
        mean_mags.push(Some(mean_mag));
        temps.push((rng.next_f64() > 0.05).then_some(temp));
        class_col.push(classes[class_idx].to_string());
    }

    let schema = Arc::new(Schema::new(vec![
        Field::new("star_id", DataType::Int64, false),
        Field::new("period_days", DataType::Float64, true),
        Field::new("amplitude_mag", DataType::Float64, true),
        Field::new("mean_mag", DataType::Float64, true),
        Field::new("temp_k", DataType::Float64, true),
        Field::new("class", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(ids)),
            Arc::new(Float64Array::from(periods)),
            Arc::new(Float64Array::from(amplitudes)),
            Arc::new(Float64Array::from(mean_mags)),
            Arc::new(Float64Array::from(temps)),
            Arc::new(StringArray::from(
                class_col.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            )),
        ],
    )
    .expect("Failed to create RecordBatch");

    let output_path = "sample_data.parquet";
    let file = std::fs::File::create(output_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!("Wrote {n_stars} stars to {output_path}");
}
