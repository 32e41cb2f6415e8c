//! Benchmarks for the character splice engine in richtext-lib.
//!
//! Run with: `cargo bench -p richtext-lib --bench splice`

use divan::{
  Bencher,
  black_box,
};
use richtext_lib::{
  StyledText,
  TextStyle,
  decompose,
  delete_texts,
  insert_as_text,
  recompose,
};

fn main() {
  divan::main();
}

fn sample(paragraphs: usize) -> StyledText {
  let text = "lorem ipsum dolor\n".repeat(paragraphs);
  let mut builder = StyledText::builder();
  builder.set_text(&text);
  let bold = TextStyle::default().bold(true);
  let mut i = 0;
  while i + 5 < text.len() {
    builder.set_style(i..i + 5, &bold);
    i += 18;
  }
  builder.build()
}

mod decompose_recompose {
  use super::*;

  #[divan::bench]
  fn decompose_16_paragraphs(bencher: Bencher) {
    let styled = sample(16);
    bencher.bench(|| black_box(decompose(black_box(&styled))));
  }

  #[divan::bench]
  fn round_trip_16_paragraphs(bencher: Bencher) {
    let styled = sample(16);
    bencher.bench(|| black_box(recompose(&decompose(black_box(&styled)))));
  }
}

mod splice_ops {
  use super::*;

  #[divan::bench]
  fn insert_mid_document(bencher: Bencher) {
    let destination = sample(16);
    let source = sample(1);
    bencher.bench(|| {
      black_box(insert_as_text(
        destination.char_len() / 2,
        black_box(&source),
        black_box(&destination),
      ))
      .unwrap()
    });
  }

  #[divan::bench]
  fn delete_scattered_ranges(bencher: Bencher) {
    let styled = sample(16);
    bencher.bench(|| {
      black_box(delete_texts(black_box(&styled), &[
        (0, 4),
        (40, 60),
        (100, 120),
      ]))
      .unwrap()
    });
  }
}
