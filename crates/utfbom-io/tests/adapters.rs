//! Stream adapters agree with the in-memory driver

use std::io::{Read, Write};

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use utfbom_core::{transform_bytes, BomRemover, BomType, DETECTION_ORDER};
use utfbom_io::{TransformReader, TransformWriter};

fn utf8_document() -> Vec<u8> {
    let mut data = BomType::Utf8.signature().to_vec();
    data.extend_from_slice("[Script Info]\nTitle: 一二三\n".repeat(500).as_bytes());
    data
}

#[test]
fn writer_strips_utf8_document() {
    let data = utf8_document();
    let mut writer = TransformWriter::with_capacity(64, Vec::new(), BomRemover::new());
    for chunk in data.chunks(100) {
        writer.write_all(chunk).expect("write");
    }
    let out = writer.finish().expect("finish");
    assert_eq!(out, data[3..].to_vec());
}

#[test]
fn reader_strips_utf8_document() {
    let data = utf8_document();
    let mut reader = TransformReader::with_capacity(100, &data[..], BomRemover::new());
    let mut out = Vec::new();
    reader.read_to_end(&mut out).expect("read");
    assert_eq!(out, data[3..].to_vec());
}

#[test]
fn reader_bytes_iterator_strips_marker() {
    let reader = TransformReader::new(&b"\xEF\xBB\xBFhi"[..], BomRemover::new());
    let out = reader.bytes().collect::<std::io::Result<Vec<u8>>>().expect("read");
    assert_eq!(out, b"hi".to_vec());
}

#[test]
fn one_byte_reads_strip_every_variant() {
    for bom in DETECTION_ORDER {
        let mut data = bom.signature().to_vec();
        data.extend_from_slice(b"payload");

        let mut reader = TransformReader::new(&data[..], BomRemover::new());
        let mut out = Vec::new();
        let mut byte = [0u8; 1];
        loop {
            let n = reader.read(&mut byte).expect("read");
            if n == 0 {
                break;
            }
            out.push(byte[0]);
        }
        assert_eq!(out, b"payload".to_vec(), "{bom:?}");
        assert_eq!(reader.transformer().stripped(), Some(bom));
    }
}

#[test]
fn reader_and_writer_share_a_remover_after_reset() {
    let mut remover = BomRemover::new();
    for bom in DETECTION_ORDER {
        let mut data = bom.signature().to_vec();
        data.extend_from_slice(b"payload");

        let mut writer = TransformWriter::new(Vec::new(), &mut remover);
        writer.write_all(&data).expect("write");
        assert_eq!(writer.finish().expect("finish"), b"payload".to_vec());
        utfbom_core::Transformer::reset(&mut remover);
    }
}

proptest! {
    #[test]
    fn adapters_match_transform_bytes(
        bom in prop::option::of(prop::sample::select(DETECTION_ORDER.to_vec())),
        body in prop::collection::vec(any::<u8>(), 0..300),
        write_chunk in 4..64usize,
        capacity in 4..64usize,
        read_len in 1..8usize,
    ) {
        let mut data = bom.map(|b| b.signature().to_vec()).unwrap_or_default();
        data.extend_from_slice(&body);
        let expected = transform_bytes(BomRemover::new(), &data)?;

        let mut writer = TransformWriter::with_capacity(capacity, Vec::new(), BomRemover::new());
        for chunk in data.chunks(write_chunk) {
            writer.write_all(chunk)?;
        }
        prop_assert_eq!(&writer.finish()?, &expected);

        let mut reader = TransformReader::with_capacity(capacity, &data[..], BomRemover::new());
        let mut out = Vec::new();
        reader.read_to_end(&mut out)?;
        prop_assert_eq!(&out, &expected);

        let mut reader = TransformReader::with_capacity(capacity, &data[..], BomRemover::new());
        let mut out = Vec::new();
        let mut buf = vec![0u8; read_len];
        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            out.extend_from_slice(&buf[..n]);
        }
        prop_assert_eq!(&out, &expected);
    }
}
