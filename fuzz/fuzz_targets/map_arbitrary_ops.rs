#![no_main]

use libfuzzer_sys::fuzz_target;
use rotamap::map::RandomAccessMap;
use rotamap::rng::XorShift64;

// Fuzz arbitrary operation sequences on RandomAccessMap
//
// Tests random sequences of put, get, delete, get_random, and clear
// operations against per-operation postconditions.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut map: RandomAccessMap<u64, u64, _> =
        RandomAccessMap::new(10_000, XorShift64::new(u64::from(data[0]))).unwrap();

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 6;
        // Small key space so operations collide with earlier ones.
        let key = u64::from(data[idx + 1] % 32);

        match op {
            0 => {
                // put
                let existed = map.contains(&key);
                let old_len = map.len();
                let result = map.put(key, key * 10);

                if existed {
                    assert!(result.is_err());
                    assert_eq!(map.len(), old_len);
                } else {
                    assert!(result.is_ok());
                    assert_eq!(map.len(), old_len + 1);
                    assert_eq!(map.get(&key), Ok(&(key * 10)));
                }
            }
            1 => {
                // get (read-only)
                let expected = map.contains(&key);
                assert_eq!(map.get(&key).is_ok(), expected);
            }
            2 => {
                // delete
                let existed = map.contains(&key);
                let old_len = map.len();

                assert_eq!(map.delete(&key), existed);
                assert!(!map.contains(&key));
                if existed {
                    assert_eq!(map.len(), old_len - 1);
                }
            }
            3 => {
                // get_random
                let was_empty = map.is_empty();
                match map.get_random().map(|value| *value) {
                    Ok(value) => {
                        assert!(!was_empty);
                        // Values are key * 10 with key < 32.
                        assert_eq!(value % 10, 0);
                        assert!(map.contains(&(value / 10)), "random pick must be live");
                    }
                    Err(_) => assert!(was_empty),
                }
            }
            4 => {
                // len / is_empty consistency
                if map.is_empty() {
                    assert_eq!(map.len(), 0);
                } else {
                    assert!(map.len() > 0);
                }
            }
            5 => {
                // clear
                map.clear();
                assert!(map.is_empty());
                assert!(map.get_random().is_err());
            }
            _ => unreachable!(),
        }

        idx += 2;
    }

    #[cfg(debug_assertions)]
    map.debug_validate_invariants();
});
