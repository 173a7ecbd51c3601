//! Properties that hold for every input, checked over hand picked variants
//! and a seeded stream of noise.
#![cfg(test)]

use std::net::{Ipv4Addr, Ipv6Addr};

use ipcanon_common::config::Config;
use ipcanon_common::network::family::AddressFamily;
use ipcanon_core::batch::{Summary, canonicalize_all};
use ipcanon_core::{CanonicalAddr, parse_ip, parse_ip_bytes, parse_ipv4, parse_ipv6};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NOISE_ALPHABET: &[u8] = b".:0123456789abcdefABCDEFxg /%[]";
const NOISE_ROUNDS: usize = 20_000;

fn noise(rng: &mut StdRng) -> String {
    let len = rng.random_range(0..=45);
    (0..len)
        .map(|_| NOISE_ALPHABET[rng.random_range(0..NOISE_ALPHABET.len())] as char)
        .collect()
}

fn is_canonical_v6(s: &str) -> bool {
    let groups: Vec<&str> = s.split(':').collect();
    groups.len() == 8
        && groups.iter().all(|g| {
            g.len() == 4 && g.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        })
}

#[test]
fn test_idempotence() {
    let inputs = [
        "0.0.0.0",
        "1.2.3.4",
        "::",
        "::1",
        "FE80::1",
        "::ffff:10.1.2.3",
        "2001:db8:0:0:1::1",
        "2001:0db8:85a3:0000:0000:8a2e:0370:7334",
    ];

    for input in inputs {
        let Ok(once) = parse_ipv6(input).or_else(|_| parse_ipv4(input)) else {
            panic!("{input:?} should be valid");
        };
        assert_eq!(parse_ipv6(&once).or_else(|_| parse_ipv4(&once)), Ok(once.clone()));
        assert_eq!(parse_ip(&once), Ok(once.clone()));
    }
}

#[test]
fn test_equivalent_spellings() {
    let spellings = [
        "2001:db8::1",
        "2001:DB8::1",
        "2001:0db8::0001",
        "2001:db8:0::1",
        "2001:db8:0:0:0:0:0:1",
        "2001:0DB8:0000:0000:0000:0000:0000:0001",
        "2001:db8::0.0.0.1",
    ];

    let canonical: Vec<String> = spellings.iter().map(|s| parse_ip(s).unwrap()).collect();
    assert!(canonical.windows(2).all(|pair| pair[0] == pair[1]), "{canonical:?}");

    assert_eq!(parse_ip("::ffff:c000:201"), parse_ip("::ffff:192.0.2.1"));
}

#[test]
fn test_length_boundaries() {
    for input in ["", "1", "::", "1.", ".:"] {
        assert!(parse_ip(input).is_err(), "{input:?} is too short");
    }

    let forty = "2001:0db8:85a3:0000:0000:8a2e:0370:73340";
    assert_eq!(forty.len(), 40);
    assert!(parse_ip(forty).is_err());
    assert!(parse_ip(&"1".repeat(1000)).is_err());
    assert!(parse_ip(&":".repeat(1000)).is_err());

    assert!(parse_ip("::1").is_ok());
}

#[test]
fn test_leading_zero_rule() {
    assert_eq!(parse_ipv4("0.0.0.0").as_deref(), Ok("0.0.0.0"));
    assert!(parse_ipv4("00.0.0.0").is_err());
    assert!(parse_ipv4("01.0.0.0").is_err());
    assert!(parse_ipv6("::ffff:0.0.0.01").is_err());
}

#[test]
fn test_colon_runs() {
    for run in 3..=8 {
        let input = format!("1{}2", ":".repeat(run));
        assert!(parse_ipv6(&input).is_err(), "{input:?}");
        assert!(parse_ip(&input).is_err(), "{input:?}");
    }
}

#[test]
fn test_totality_and_agreement_with_std() {
    let mut rng = StdRng::seed_from_u64(0x1fc0_ffee);

    for _ in 0..NOISE_ROUNDS {
        let input = noise(&mut rng);

        let Ok(canonical) = parse_ip(&input) else {
            continue;
        };

        assert_eq!(parse_ip(&canonical), Ok(canonical.clone()), "{input:?}");

        if canonical.contains(':') {
            assert!(is_canonical_v6(&canonical), "{input:?} -> {canonical:?}");
            if let Ok(std_addr) = input.parse::<Ipv6Addr>() {
                assert_eq!(ipcanon_core::ipv6::canonical(&std_addr), canonical, "{input:?}");
            }
        } else {
            assert_eq!(input.parse::<Ipv4Addr>().map(|a| a.to_string()), Ok(canonical.clone()));
        }
    }
}

#[test]
fn test_raw_bytes_never_fault() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..NOISE_ROUNDS {
        let len = rng.random_range(0..=40);
        let bytes: Vec<u8> = (0..len).map(|_| rng.random()).collect();
        let _ = parse_ip_bytes(&bytes);
    }

    assert!(parse_ip_bytes("ä.ö.ü.ß".as_bytes()).is_err());
}

#[test]
fn test_batch_matches_single_calls() {
    let inputs = ["10.0.0.1", "::1", "nope", "1.2.3.04", "::ffff:1.2.3.4"];
    let outcomes = canonicalize_all(&inputs, &Config::default());

    for (input, outcome) in inputs.iter().zip(&outcomes) {
        assert_eq!(
            outcome.result.map(|addr| addr.to_string()),
            parse_ip(input),
            "{input:?}"
        );
    }

    let v6_only = Config {
        family: Some(AddressFamily::V6),
        quiet: 0,
    };
    let summary = Summary::from_outcomes(&canonicalize_all(&inputs, &v6_only));
    assert_eq!(summary, Summary { valid: 2, invalid: 3 });

    let addr: CanonicalAddr = "::ffff:1.2.3.4".parse().unwrap();
    assert_eq!(addr.family(), AddressFamily::V6);
}
