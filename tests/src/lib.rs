#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rand_distr::{Distribution, Exp, LogNormal, Normal, Uniform};
    use rmi::prelude::*;
    use rmi::Error;

    fn sorted(dataset: &[f64]) -> Vec<f64> {
        let mut keys = dataset.to_vec();
        keys.sort_by(f64::total_cmp);
        keys
    }

    /// Position of the last occurrence of `key` in the sorted keys
    fn true_position(keys: &[f64], key: f64) -> usize {
        keys.partition_point(|k| *k <= key) - 1
    }

    fn datasets(size: usize) -> Vec<(&'static str, Vec<f64>)> {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        let uniform = Uniform::new(-1e6, 1e6)
            .sample_iter(&mut rng)
            .take(size)
            .collect();
        let normal = Normal::new(40.0, 12.0)
            .unwrap()
            .sample_iter(&mut rng)
            .take(size)
            .collect();
        let lognormal = LogNormal::new(0.0, 2.0)
            .unwrap()
            .sample_iter(&mut rng)
            .take(size)
            .collect();
        let exponential = Exp::new(0.5)
            .unwrap()
            .sample_iter(&mut rng)
            .take(size)
            .collect();
        // Integer ages, lots of duplicates
        let ages = Uniform::new(0, 100)
            .sample_iter(&mut rng)
            .take(size)
            .map(|age: u32| age as f64)
            .collect();

        vec![
            ("uniform", uniform),
            ("normal", normal),
            ("lognormal", lognormal),
            ("exponential", exponential),
            ("ages", ages),
        ]
    }

    /// Every training key lands within `max_error` of its true position
    fn test_error_bound(dataset: &[f64]) {
        let index: LearnedIndex = LearnedIndex::build(dataset).unwrap();
        let keys = sorted(dataset);

        for key in dataset {
            let ApproxPos { guess, lo, hi } = index.guess(*key);
            let position = true_position(&keys, *key);

            assert!(guess.abs_diff(position) <= index.max_error());
            assert!(lo <= position && position <= hi);
        }
    }

    /// Every key is found, at an offset which holds that key
    fn test_lookups(dataset: &[f64]) {
        let index: LearnedIndex = LearnedIndex::build(dataset).unwrap();

        for key in dataset {
            let offset = index.lookup(*key).unwrap();
            assert_eq!(dataset[offset], *key);

            // Lookups don't depend on any state
            assert_eq!(index.lookup(*key), Ok(offset));
        }
    }

    /// All offsets of a key are returned, in the order of the dataset
    fn test_lookup_all(dataset: &[f64]) {
        let index: LearnedIndex = LearnedIndex::build(dataset).unwrap();

        for key in dataset.iter().take(500) {
            let expected: Vec<usize> = dataset
                .iter()
                .enumerate()
                .filter(|(_, k)| *k == key)
                .map(|(offset, _)| offset)
                .collect();
            assert_eq!(index.lookup_all(*key), Ok(expected));
        }
    }

    /// Keys which are not in the dataset are never found
    fn test_not_found(dataset: &[f64]) {
        let index: LearnedIndex = LearnedIndex::build(dataset).unwrap();
        let keys = sorted(dataset);
        let mut rng = StdRng::seed_from_u64(99);

        let min = keys[0];
        let max = keys[keys.len() - 1];
        let span = max - min;

        for _ in 0..10_000 {
            let key = rng.gen_range((min - span)..(max + span));
            if keys.binary_search_by(|k| k.total_cmp(&key)).is_ok() {
                continue;
            }

            assert_eq!(index.lookup(key), Err(Error::KeyNotFound(key)));
            assert!(!index.contains(key));
        }
    }

    #[test]
    fn error_bound() {
        for (name, dataset) in datasets(20_000) {
            println!("error bound on {}", name);
            test_error_bound(&dataset);
        }
    }

    #[test]
    fn lookups() {
        for (name, dataset) in datasets(20_000) {
            println!("lookups on {}", name);
            test_lookups(&dataset);
        }
    }

    #[test]
    fn lookup_all() {
        for (name, dataset) in datasets(5_000) {
            println!("lookup_all on {}", name);
            test_lookup_all(&dataset);
        }
    }

    #[test]
    fn not_found() {
        for (name, dataset) in datasets(20_000) {
            println!("not found on {}", name);
            test_not_found(&dataset);
        }
    }

    #[test]
    fn boundary_keys() {
        for (_, dataset) in datasets(10_000) {
            let index: LearnedIndex = LearnedIndex::build(&dataset).unwrap();
            let keys = sorted(&dataset);

            let min = keys[0];
            let max = keys[keys.len() - 1];
            assert_eq!(dataset[index.lookup(min).unwrap()], min);
            assert_eq!(dataset[index.lookup(max).unwrap()], max);

            for key in [f64::MIN, -1e300, min - 1.0, max + 1.0, 1e300, f64::MAX] {
                let ApproxPos { guess, lo, hi } = index.guess(key);
                assert!(lo <= guess && guess <= hi && hi < index.len());
            }

            assert_eq!(index.guess(f64::MIN).guess, 0);
            assert_eq!(index.guess(f64::MAX).guess, index.len() - 1);
        }
    }

    #[test]
    fn uniform_max_error() {
        let mut rng = StdRng::seed_from_u64(42);
        let dataset: Vec<f64> = Uniform::new(0.0, 1.0)
            .sample_iter(&mut rng)
            .take(10_000)
            .collect();

        let index: LearnedIndex = LearnedIndex::build(&dataset).unwrap();
        println!("max error on 10k uniform keys: {}", index.max_error());

        // About 70 on this seed, other seeds land between 45 and 60
        assert!(index.max_error() <= 80);
    }

    #[test]
    fn model_is_monotone_on_training_range() {
        for (name, dataset) in datasets(10_000) {
            let index: LearnedIndex = LearnedIndex::build(&dataset).unwrap();
            let keys = sorted(&dataset);

            let predictions: Vec<f64> = keys.iter().map(|key| index.predict(*key)).collect();
            assert!(
                predictions.windows(2).all(|w| w[0] <= w[1]),
                "{} is not monotone",
                name
            );
        }
    }

    #[test]
    fn example_dataset() {
        let dataset = [5.0, 1.0, 3.0, 3.0, 9.0];
        let index: LearnedIndex = LearnedIndex::build(&dataset).unwrap();

        let table: Vec<(f64, usize)> = index
            .table()
            .iter()
            .map(|entry| (entry.key, entry.offset))
            .collect();
        assert_eq!(table, vec![(1.0, 1), (3.0, 2), (3.0, 3), (5.0, 0), (9.0, 4)]);

        assert!(matches!(index.lookup(3.0), Ok(2) | Ok(3)));
        assert_eq!(index.lookup(7.0), Err(Error::KeyNotFound(7.0)));
    }

    #[test]
    fn shared_between_threads() {
        let (_, dataset) = datasets(20_000).remove(1);
        let index: LearnedIndex = LearnedIndex::build(&dataset).unwrap();

        let index = &index;
        let dataset = &dataset;

        std::thread::scope(|scope| {
            for chunk in dataset.chunks(5_000) {
                scope.spawn(move || {
                    for key in chunk {
                        let offset = index.lookup(*key).unwrap();
                        assert_eq!(dataset[offset], *key);
                    }
                });
            }
        });
    }
}

#[cfg(test)]
mod properties {
    use proptest::prelude::*;
    use rmi::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn every_key_is_found(
            raw in prop::collection::vec(-1_000i32..1_000, 2..2_000)
        ) {
            let dataset: Vec<f64> = raw.iter().map(|k| *k as f64 / 4.0).collect();
            prop_assume!(dataset.iter().any(|k| *k != dataset[0]));

            let index: LearnedIndex = LearnedIndex::build(&dataset).unwrap();
            let mut keys = dataset.clone();
            keys.sort_by(f64::total_cmp);

            for key in &dataset {
                let position = keys.partition_point(|k| k <= key) - 1;
                prop_assert!(index.guess(*key).guess.abs_diff(position) <= index.max_error());

                let offset = index.lookup(*key);
                prop_assert!(offset.is_ok(), "{} not found", key);
                prop_assert_eq!(dataset[offset.unwrap()], *key);
            }
        }

        #[test]
        fn absent_keys_are_not_found(
            raw in prop::collection::vec(-1_000i32..1_000, 2..2_000),
            probes in prop::collection::vec(-2_000i32..2_000, 1..200)
        ) {
            // Keys are even, probes are odd
            let dataset: Vec<f64> = raw.iter().map(|k| (*k * 2) as f64).collect();
            prop_assume!(dataset.iter().any(|k| *k != dataset[0]));

            let index: LearnedIndex = LearnedIndex::build(&dataset).unwrap();
            for probe in probes {
                let key = (probe * 2 + 1) as f64;
                prop_assert!(index.lookup(key).is_err());
                prop_assert!(index.lookup_all(key).is_err());
            }
        }

        #[test]
        fn guesses_are_in_range(
            raw in prop::collection::vec(-1e9f64..1e9, 2..500),
            probe in proptest::num::f64::NORMAL | proptest::num::f64::ZERO
        ) {
            prop_assume!(raw.iter().any(|k| *k != raw[0]));

            let index: LearnedIndex = LearnedIndex::build(&raw).unwrap();
            let ApproxPos { guess, lo, hi } = index.guess(probe);
            prop_assert!(lo <= guess && guess <= hi && hi < index.len());
        }
    }
}
