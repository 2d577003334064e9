//! Address decoder tests.

use cachesim::cache::decoder::{AddressDecoder, DecodedAddr};
use cachesim::config::Geometry;
use rstest::rstest;

fn decoder(s: u32, b: u32) -> AddressDecoder {
    AddressDecoder::new(&Geometry::new(s, 1, b).unwrap())
}

#[rstest]
#[case(1, 1, 0x0, 0, 0)]
#[case(1, 1, 0x2, 1, 0)]
#[case(1, 1, 0x4, 0, 1)]
#[case(4, 4, 0x10, 1, 0)]
#[case(4, 4, 0x110, 1, 1)]
#[case(4, 4, 0x210, 1, 2)]
#[case(4, 4, 0x12, 1, 0)]
#[case(2, 6, 0xdead_beef, 3, 0xdead_beef >> 8)]
fn test_decode(
    #[case] s: u32,
    #[case] b: u32,
    #[case] addr: u64,
    #[case] set_index: usize,
    #[case] tag: u64,
) {
    assert_eq!(decoder(s, b).decode(addr), DecodedAddr { set_index, tag });
}

#[test]
fn test_offset_bits_do_not_change_set_or_tag() {
    let d = decoder(3, 5);
    let base = d.decode(0x4000);
    for offset in 0..32 {
        assert_eq!(d.decode(0x4000 + offset), base);
    }
    assert_ne!(d.decode(0x4000 + 32), base);
}

#[test]
fn test_decode_is_pure() {
    let d = decoder(5, 3);
    let addr = 0x7ff0_005c8;
    assert_eq!(d.decode(addr), d.decode(addr));
}

#[test]
fn test_full_width_geometry_has_zero_tag() {
    let d = decoder(8, 56);
    let decoded = d.decode(u64::MAX);
    assert_eq!(decoded.tag, 0);
    assert_eq!(decoded.set_index, 0xff);
}

#[test]
fn test_block_offset_and_base() {
    let d = decoder(2, 4);
    assert_eq!(d.block_offset(0x1234), 0x4);
    assert_eq!(d.block_base(0x1234), 0x1230);
}
