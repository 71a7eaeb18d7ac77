//! Integration tests for footnote renumbering: declaration-order mapping,
//! reference consistency, and the bijection property.

use proptest::prelude::*;
use rfcdoc::rfc::footnotes::process_footnotes;
use rfcdoc::rfc::testing::samples;
use rstest::rstest;

#[test]
fn scrambled_declarations_become_sequential() {
    let fix = process_footnotes(samples::SCRAMBLED_FOOTNOTES);
    assert_eq!(fix.declarations, 5);
    assert_eq!(
        fix.text,
        "\
1. Intro

First claim[1] and a second one[2], then more[3], another[4], last[5].

[1] Declared first
[2] Declared second
[3] Declared third
[4] Declared fourth
[5] Declared fifth
"
    );
}

#[rstest]
#[case("[2] only\nref[2]\n", "[1] only\nref[1]\n")]
#[case("[10] a\n[20] b\nsee [20] then [10]\n", "[1] a\n[2] b\nsee [2] then [1]\n")]
#[case("no footnotes at all\n", "no footnotes at all\n")]
#[case("ref[7] with no declaration\n", "ref[7] with no declaration\n")]
fn renumbering_cases(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(process_footnotes(input).text, expected);
}

#[test]
fn renumbering_is_idempotent() {
    let once = process_footnotes(samples::SCRAMBLED_FOOTNOTES).text;
    let twice = process_footnotes(&once).text;
    assert_eq!(once, twice);
}

proptest! {
    /// After renumbering, declaration numbers are exactly 1..=k in source
    /// order, and every reference carries its declaration's new number.
    #[test]
    fn new_numbers_form_a_bijection(
        originals in proptest::collection::hash_set(1u32..10_000, 1..12)
    ) {
        let originals: Vec<u32> = originals.into_iter().collect();
        let mut doc = String::new();
        // Reference every original once in the body, in reverse order.
        for original in originals.iter().rev() {
            doc.push_str(&format!("body mentions [{original}]\n"));
        }
        doc.push('\n');
        for (i, original) in originals.iter().enumerate() {
            doc.push_str(&format!("[{original}] note {i}\n"));
        }

        let fix = process_footnotes(&doc);
        prop_assert_eq!(fix.declarations, originals.len());

        // Declarations, in order, carry 1..=k.
        let mut seen = Vec::new();
        for line in fix.text.lines() {
            if let Some(rest) = line.strip_prefix('[') {
                if let Some((number, tail)) = rest.split_once(']') {
                    if tail.starts_with(' ') {
                        seen.push(number.parse::<usize>().unwrap());
                    }
                }
            }
        }
        let expected: Vec<usize> = (1..=originals.len()).collect();
        prop_assert_eq!(seen, expected);

        // Body reference i (reverse order) maps to declaration k - i.
        let body_numbers: Vec<usize> = fix
            .text
            .lines()
            .filter(|l| l.starts_with("body mentions "))
            .map(|l| {
                let open = l.find('[').unwrap();
                let close = l.find(']').unwrap();
                l[open + 1..close].parse::<usize>().unwrap()
            })
            .collect();
        let expected_body: Vec<usize> = (1..=originals.len()).rev().collect();
        prop_assert_eq!(body_numbers, expected_body);
    }
}
