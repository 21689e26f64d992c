// Sentence scoring — word-frequency accumulation and per-sentence scores.

pub mod frequency;
pub mod sentence;
