use super::*;

// A miniature of the malformed vocabulary list this crate exists for:
// bareword keys and values, one field per line, trailing commas.
pub(crate) fn vocab_sample() -> &'static str {
    r#"{
  初中词汇: [
    {
      word: abandon,
      meaning: 放弃,
      level: 1,
      active: true
    },
    {
      word: ability,
      meaning: 能力,
      level: 2,
      active: false
    },
  ]
}
"#
}

mod documents;
mod errors;
mod value_typing;
