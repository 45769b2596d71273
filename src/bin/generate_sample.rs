use std::fs::File;
use std::io::{BufWriter, Write};

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

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// One synthetic star: absolute magnitude and color drawn from a population,
/// apparent magnitude derived from a random distance.
fn synthesize_star(rng: &mut SimpleRng) -> (f64, f64, f64) {
    let kind = rng.next_f64();

    // (B-V, M) per population
    let (b_v, abs_mag) = if kind < 0.72 {
        // main sequence: color-magnitude relation plus scatter
        let b_v = rng.uniform(-0.25, 1.8);
        (b_v, 5.2 * b_v + 1.7 + rng.gauss(0.0, 0.45))
    } else if kind < 0.90 {
        // giant branch
        (rng.uniform(0.8, 1.7), rng.gauss(0.4, 1.0))
    } else {
        // white dwarfs, mostly below the fixed plot range
        (rng.uniform(-0.1, 0.6), rng.gauss(11.5, 0.8))
    };

    // log-uniform distance 10..500 pc → parallax in mas
    let distance_pc = 10.0_f64 * (50.0_f64).powf(rng.next_f64());
    let plx = 1000.0 / distance_pc;
    let vmag = abs_mag - 5.0 * (plx / 100.0).log10();

    (vmag, plx, b_v)
}

fn main() -> std::io::Result<()> {
    let mut rng = SimpleRng::new(42);

    let file = File::create("data/hr_stars.txt")?;
    let mut out = BufWriter::new(file);

    writeln!(out, "id     Vmag       RA        Dec      Plx     B-V")?;

    for id in 1..=120 {
        let (vmag, plx, b_v) = synthesize_star(&mut rng);
        let ra = rng.uniform(0.0, 360.0);
        let dec = rng.uniform(-90.0, 90.0);

        // A few imperfect rows so the loader's tolerance paths see real input:
        // every 40th star lacks its B-V field, star 25 has an unusable
        // parallax token, star 60 a negative parallax measurement.
        if id % 40 == 0 {
            writeln!(out, "{id:<5} {vmag:>7.3} {ra:>9.4} {dec:>9.4} {plx:>8.2}")?;
        } else if id == 25 {
            writeln!(out, "{id:<5} {vmag:>7.3} {ra:>9.4} {dec:>9.4}      nan {b_v:>7.3}")?;
        } else if id == 60 {
            writeln!(
                out,
                "{id:<5} {vmag:>7.3} {ra:>9.4} {dec:>9.4} {:>8.2} {b_v:>7.3}",
                -plx
            )?;
        } else {
            writeln!(
                out,
                "{id:<5} {vmag:>7.3} {ra:>9.4} {dec:>9.4} {plx:>8.2} {b_v:>7.3}"
            )?;
        }
    }

    out.flush()
}
