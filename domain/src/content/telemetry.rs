//! Synthetic host-like readings. None of these look at the real machine.

use rand::Rng;

pub fn cpu_usage_percent<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(20..80)
}

pub fn memory_utilization_percent<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(30..70)
}

pub fn throughput_mb_per_sec<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(50..150)
}

pub fn active_connections<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(100..1_100)
}

pub fn disk_io_mb_per_sec<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(5.0..480.0)
}

pub fn thread_count<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(8..256)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_ranges() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..1_000 {
            assert!((20..80).contains(&cpu_usage_percent(&mut rng)));
            assert!((30..70).contains(&memory_utilization_percent(&mut rng)));
            assert!((50..150).contains(&throughput_mb_per_sec(&mut rng)));
            assert!((100..1_100).contains(&active_connections(&mut rng)));
        }
    }
}
