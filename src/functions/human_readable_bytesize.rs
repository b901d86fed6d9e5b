/// Convert a raw bytesize into a human readable string, e.g. 4_248_578 returns 4.25 MB
pub fn human_readable_bytesize(num: u64) -> String {
  let num = num as f64;
  if num < 1000.0 {
    return format!("{} B", num);
  }
  const UNITS : [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];
  const DELIMITER : f64 = 1000_f64;

  let exponent = std::cmp::min((num.ln() / DELIMITER.ln()).floor() as i32, (UNITS.len() - 1) as i32);
  let pretty_bytes = num / DELIMITER.powi(exponent);
  format!("{:.2} {}", pretty_bytes, UNITS[exponent as usize])
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn formats_bytes_and_larger_units() {
    assert_eq!(human_readable_bytesize(512), "512 B");
    assert_eq!(human_readable_bytesize(4_248_578), "4.25 MB");
    assert_eq!(human_readable_bytesize(4_248_578_547), "4.25 GB");
  }
}
