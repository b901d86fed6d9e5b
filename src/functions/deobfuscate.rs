/// Rolling XOR key offset of the manifest obfuscation
pub(crate) const OBFUSCATION_KEY: u8 = 0x69;

/// Reverses the manifest obfuscation in place: byte `i` is XORed with
/// `(i mod 255 + 0x69) mod 256`. Applying it twice restores the input.
pub(crate) fn deobfuscate(data: &mut [u8]) {
  for (i, byte) in data.iter_mut().enumerate() {
    *byte ^= ((i % 0xFF) as u8).wrapping_add(OBFUSCATION_KEY);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn key_rolls_over_every_255_bytes() {
    let mut data = vec![0_u8; 600];
    deobfuscate(&mut data);
    assert_eq!(data[0], 0x69);
    assert_eq!(data[1], 0x6A);
    assert_eq!(data[150], 0xFF);
    assert_eq!(data[151], 0x00);
    assert_eq!(data[254], (254_u16 + 0x69) as u8);
    assert_eq!(data[255], 0x69);
    assert_eq!(data[510], 0x69);
  }

  #[test]
  fn applying_twice_restores_the_input() {
    let original : Vec<u8> = (0..1024_u32).map(|i| (i * 7) as u8).collect();
    let mut data = original.clone();
    deobfuscate(&mut data);
    assert_ne!(data, original);
    deobfuscate(&mut data);
    assert_eq!(data, original);
  }
}
