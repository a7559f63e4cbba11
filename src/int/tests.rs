use super::*;
use crate::common::Error;
use proptest::prelude::*;

#[test]
fn test_read_uint_le_be() {
    let data = [0x12, 0x34, 0x56, 0x78, 0x90, 0xAB];
    assert_eq!(read_uint_le(&data, 0, 3).unwrap(), 0x563412);
    assert_eq!(read_uint_be(&data, 0, 3).unwrap(), 0x123456);
    assert_eq!(read_uint_be(&data, 0, 6).unwrap(), 0x1234_5678_90AB);
    assert_eq!(read_uint_le(&data, 5, 1).unwrap(), 0xAB);
}

#[test]
fn test_read_int_sign_extension() {
    assert_eq!(read_int_le(&[0xFF, 0xFF, 0xFF], 0, 3).unwrap(), -1);
    assert_eq!(read_int_be(&[0x80, 0x00], 0, 2).unwrap(), -32768);
    assert_eq!(read_int_be(&[0x7F, 0xFF], 0, 2).unwrap(), 32767);
    assert_eq!(read_int_le(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x80], 0, 6).unwrap(), -(1i64 << 47));
}

#[test]
fn test_width_out_of_range() {
    let data = [0u8; 8];
    assert!(matches!(read_uint_le(&data, 0, 0), Err(Error::InvalidArgument(_))));
    assert!(matches!(read_int_be(&data, 0, 7), Err(Error::InvalidArgument(_))));
    let mut data = data;
    assert!(matches!(write_uint_be(&mut data, 1, 0, 7), Err(Error::InvalidArgument(_))));
}

#[test]
fn test_read_past_end() {
    let data = [0u8; 4];
    assert_eq!(
        read_uint_le(&data, 2, 3),
        Err(Error::OutOfRange { offset: 2, len: 3, size: 4 })
    );
    assert!(read_u32_le(&data, 1).is_err());
    assert!(read_u8(&data, usize::MAX).is_err());
}

#[test]
fn test_write_uint() {
    let mut data = [0u8; 6];
    assert_eq!(write_uint_le(&mut data, 0x123456, 0, 3).unwrap(), 3);
    assert_eq!(write_uint_be(&mut data, 0x123456, 3, 3).unwrap(), 6);
    assert_eq!(data, [0x56, 0x34, 0x12, 0x12, 0x34, 0x56]);
}

#[test]
fn test_write_uint_truncates_value_to_width() {
    let mut data = [0u8; 2];
    write_uint_le(&mut data, 0xABCDEF, 0, 2).unwrap();
    assert_eq!(data, [0xEF, 0xCD]);
}

#[test]
fn test_write_int_negative() {
    let mut data = [0u8; 3];
    write_int_be(&mut data, -2, 0, 3).unwrap();
    assert_eq!(data, [0xFF, 0xFF, 0xFE]);
    assert_eq!(read_int_be(&data, 0, 3).unwrap(), -2);
}

#[test]
fn test_typed_accessors() {
    let mut data = [0u8; 8];
    assert_eq!(write_u16_be(&mut data, 0x0102, 0).unwrap(), 2);
    assert_eq!(&data[..2], &[0x01, 0x02]);
    assert_eq!(read_u16_le(&data, 0).unwrap(), 0x0201);

    write_i32_le(&mut data, -5, 4).unwrap();
    assert_eq!(read_i32_le(&data, 4).unwrap(), -5);

    write_f64_be(&mut data, 1.5, 0).unwrap();
    assert_eq!(read_f64_be(&data, 0).unwrap(), 1.5);
    assert_eq!(&data[..2], &[0x3F, 0xF8]);

    write_u8(&mut data, 0xFE, 7).unwrap();
    assert_eq!(read_i8(&data, 7).unwrap(), -2);
}

#[test]
fn test_typed_write_past_end_leaves_region() {
    let mut data = [9u8; 3];
    assert!(write_u32_le(&mut data, 0, 0).is_err());
    assert_eq!(data, [9, 9, 9]);
}

proptest! {
    #[test]
    fn prop_int_roundtrip(value in -(1i64 << 47)..(1i64 << 47)) {
        let mut data = [0u8; 6];
        write_int_le(&mut data, value, 0, 6).unwrap();
        prop_assert_eq!(read_int_le(&data, 0, 6).unwrap(), value);
        write_int_be(&mut data, value, 0, 6).unwrap();
        prop_assert_eq!(read_int_be(&data, 0, 6).unwrap(), value);
    }

    #[test]
    fn prop_uint_widths(value in any::<u64>(), width in 1usize..=6) {
        let mut data = [0u8; 6];
        write_uint_be(&mut data, value, 0, width).unwrap();
        let mask = (1u64 << (8 * width)) - 1;
        prop_assert_eq!(read_uint_be(&data, 0, width).unwrap(), value & mask);
        let reversed: Vec<u8> = data[..width].iter().rev().copied().collect();
        prop_assert_eq!(read_uint_le(&reversed, 0, width).unwrap(), value & mask);
    }
}
