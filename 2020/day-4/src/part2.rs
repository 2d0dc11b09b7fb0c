use std::collections::HashMap;

use aoc2020_utils::CharQueue;
use miette::*;

use crate::part1::REQUIRED;

/// Tokenizes one passport record into `name -> value` pairs, streaming it
/// character by character through two small queues. A `:` closes the name
/// token, whitespace closes the value token.
fn fields(record: &str) -> Result<HashMap<String, String>> {
    // names are exactly three chars; values top out around ten
    let mut name_storage = ['\0'; 3];
    let mut value_storage = ['\0'; 16];
    let mut name_queue = CharQueue::new(&mut name_storage);
    let mut value_queue = CharQueue::new(&mut value_storage);
    let mut name_out = ['\0'; 4];
    let mut value_out = ['\0'; 17];

    let mut fields = HashMap::new();
    let mut pending_name: Option<String> = None;

    for ch in record.chars() {
        match ch {
            ':' if pending_name.is_none() => {
                let len = name_queue.flush(&mut name_out)?;
                pending_name = Some(name_out[..len].iter().collect());
            }
            ' ' | '\n' => {
                if let Some(name) = pending_name.take() {
                    let len = value_queue.flush(&mut value_out)?;
                    fields.insert(name, value_out[..len].iter().collect());
                }
            }
            _ if pending_name.is_none() => name_queue.enqueue(ch)?,
            _ => value_queue.enqueue(ch)?,
        }
    }
    // record may end without trailing whitespace
    if let Some(name) = pending_name.take() {
        let len = value_queue.flush(&mut value_out)?;
        fields.insert(name, value_out[..len].iter().collect());
    }

    Ok(fields)
}

fn year_in_range(value: &str, lo: u32, hi: u32) -> bool {
    value.len() == 4
        && value
            .parse::<u32>()
            .is_ok_and(|year| (lo..=hi).contains(&year))
}

fn valid_height(value: &str) -> bool {
    if let Some(cm) = value.strip_suffix("cm") {
        cm.parse::<u32>().is_ok_and(|n| (150..=193).contains(&n))
    } else if let Some(inches) = value.strip_suffix("in") {
        inches.parse::<u32>().is_ok_and(|n| (59..=76).contains(&n))
    } else {
        false
    }
}

fn valid_field(name: &str, value: &str) -> bool {
    match name {
        "byr" => year_in_range(value, 1920, 2002),
        "iyr" => year_in_range(value, 2010, 2020),
        "eyr" => year_in_range(value, 2020, 2030),
        "hgt" => valid_height(value),
        "hcl" => value.strip_prefix('#').is_some_and(|hex| {
            hex.len() == 6
                && hex
                    .bytes()
                    .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        }),
        "ecl" => matches!(value, "amb" | "blu" | "brn" | "gry" | "grn" | "hzl" | "oth"),
        "pid" => value.len() == 9 && value.bytes().all(|b| b.is_ascii_digit()),
        _ => false,
    }
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut valid = 0;
    for record in input.split("\n\n") {
        let fields = fields(record)?;
        if REQUIRED
            .iter()
            .all(|name| fields.get(*name).is_some_and(|value| valid_field(name, value)))
        {
            valid += 1;
        }
    }

    Ok(valid.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn rejects_the_invalid_batch() -> Result<()> {
        let input = "eyr:1972 cid:100
hcl:#18171d ecl:amb hgt:170 pid:186cm iyr:2018 byr:1926

iyr:2019
hcl:#602927 eyr:1967 hgt:170cm
ecl:grn pid:012533040 byr:1946

hcl:dab227 iyr:2012
ecl:brn hgt:182cm pid:021572410 eyr:2020 byr:1992 cid:277

hgt:59cm ecl:zzz
eyr:2038 hcl:74454a iyr:2023
pid:3556412378 byr:2007";
        assert_eq!("0", process(input)?);
        Ok(())
    }

    #[test]
    fn accepts_the_valid_batch() -> Result<()> {
        let input = "pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030 byr:1980
hcl:#623a2f

eyr:2029 ecl:blu cid:129 byr:1989
iyr:2014 pid:896056539 hcl:#a97842 hgt:165cm

hcl:#888785
hgt:164cm byr:2001 iyr:2015 cid:88
pid:545766238 ecl:hzl
eyr:2022

iyr:2010 hgt:158cm hcl:#b6652a ecl:blu byr:1944 eyr:2021 pid:093154719";
        assert_eq!("4", process(input)?);
        Ok(())
    }

    #[test]
    fn tokenizes_names_and_values() -> Result<()> {
        let parsed = fields("ecl:gry pid:860033327\nhcl:#fffffd")?;
        assert_eq!(parsed.get("ecl").map(String::as_str), Some("gry"));
        assert_eq!(parsed.get("pid").map(String::as_str), Some("860033327"));
        assert_eq!(parsed.get("hcl").map(String::as_str), Some("#fffffd"));
        Ok(())
    }

    #[rstest]
    #[case("byr", "2002", true)]
    #[case("byr", "2003", false)]
    #[case("hgt", "60in", true)]
    #[case("hgt", "190cm", true)]
    #[case("hgt", "190in", false)]
    #[case("hgt", "190", false)]
    #[case("hcl", "#123abc", true)]
    #[case("hcl", "#123abz", false)]
    #[case("hcl", "123abc", false)]
    #[case("ecl", "brn", true)]
    #[case("ecl", "wat", false)]
    #[case("pid", "000000001", true)]
    #[case("pid", "0123456789", false)]
    fn validates_fields(#[case] name: &str, #[case] value: &str, #[case] expected: bool) {
        assert_eq!(valid_field(name, value), expected);
    }
}
