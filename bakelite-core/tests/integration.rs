use bakelite_core::{ByteReader, CategoryBlock, CategoryCodec, Date, FixedSizeCategories};

#[test]
fn packed_date_travels_through_a_reader() {
    let date = Date {
        year: 1999,
        month: 12,
        day: 31,
    };
    let bytes = date.to_packed().to_be_bytes();

    let mut r = ByteReader::new(&bytes);
    assert_eq!(Date::from_packed(r.u16_be().unwrap()), date);
    assert!(r.is_empty());
}

#[test]
fn appinfo_style_split_and_rejoin() {
    // A category block followed by format-specific settings bytes.
    let mut raw = vec![0xc0; 16];
    raw.extend_from_slice(&[0, 0, 1]);

    let codec = FixedSizeCategories::new(16);
    let (block, tail) = codec.split(&raw).unwrap();
    assert_eq!(block.len(), 16);
    assert_eq!(tail, &[0, 0, 1]);

    assert_eq!(codec.join(&block, tail), raw);
}

#[test]
fn category_block_is_opaque_bytes() {
    let block = CategoryBlock::new(vec![1, 2, 3]);
    assert_eq!(block.as_bytes(), &[1, 2, 3]);
    assert_eq!(CategoryBlock::from(vec![1, 2, 3]), block);
}
