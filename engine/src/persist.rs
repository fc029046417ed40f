use crate::lexicon::{Lexicon, Polarity, DEFAULT_WEIGHT};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{Read, Write};
use std::path::Path;

/// On-disk lexicon: two term lists, each entry a bare term or a weighted one.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LexiconFile {
    #[serde(default)]
    pub positive: Vec<LexiconTerm>,
    #[serde(default)]
    pub negative: Vec<LexiconTerm>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LexiconTerm {
    Plain(String),
    Weighted { term: String, weight: f64 },
}

impl LexiconTerm {
    pub fn term(&self) -> &str {
        match self {
            LexiconTerm::Plain(t) | LexiconTerm::Weighted { term: t, .. } => t,
        }
    }

    pub fn weight(&self) -> f64 {
        match self {
            LexiconTerm::Plain(_) => DEFAULT_WEIGHT,
            LexiconTerm::Weighted { weight, .. } => *weight,
        }
    }

    fn new(term: &str, weight: f64) -> Self {
        if weight == DEFAULT_WEIGHT {
            LexiconTerm::Plain(term.to_string())
        } else {
            LexiconTerm::Weighted { term: term.to_string(), weight }
        }
    }
}

impl LexiconFile {
    /// Validate every entry and build the lexicon.
    pub fn into_lexicon(self) -> Result<Lexicon> {
        let mut builder = Lexicon::builder();
        let lists = [(Polarity::Positive, self.positive), (Polarity::Negative, self.negative)];
        for (polarity, terms) in lists {
            for entry in terms {
                let term = entry.term();
                let weight = entry.weight();
                if term.trim().is_empty() {
                    bail!("empty {polarity:?} lexicon term");
                }
                if !weight.is_finite() || weight <= 0.0 {
                    bail!("lexicon term {term:?} has invalid weight {weight}; weights must be positive");
                }
                builder.insert(term, polarity, weight);
            }
        }
        Ok(builder.build())
    }

    /// Snapshot of `lexicon`, terms sorted.
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        let mut entries: Vec<_> = lexicon.entries().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        let mut file = LexiconFile::default();
        for (term, w) in entries {
            if w.pos > 0.0 {
                file.positive.push(LexiconTerm::new(term, w.pos));
            }
            if w.neg > 0.0 {
                file.negative.push(LexiconTerm::new(term, w.neg));
            }
        }
        file
    }
}

pub fn load_lexicon_file<P: AsRef<Path>>(path: P) -> Result<LexiconFile> {
    let path = path.as_ref();
    let mut f = File::open(path).with_context(|| format!("opening lexicon {}", path.display()))?;
    let mut buf = String::new();
    f.read_to_string(&mut buf)?;
    let file: LexiconFile = serde_json::from_str(&buf).with_context(|| format!("parsing lexicon {}", path.display()))?;
    Ok(file)
}

pub fn load_lexicon<P: AsRef<Path>>(path: P) -> Result<Lexicon> {
    let path = path.as_ref();
    let lexicon = load_lexicon_file(path)?.into_lexicon().with_context(|| format!("invalid lexicon {}", path.display()))?;
    tracing::info!(path = %path.display(), terms = lexicon.len(), emoji = lexicon.emoji().len(), "loaded lexicon");
    Ok(lexicon)
}

pub fn save_lexicon<P: AsRef<Path>>(path: P, file: &LexiconFile) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        create_dir_all(dir)?;
    }
    let mut f = File::create(path)?;
    let json = serde_json::to_string_pretty(file)?;
    f.write_all(json.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_plain_and_weighted_terms() {
        let file: LexiconFile = serde_json::from_str(
            r#"{"positive": ["Nice", {"term": "stellar", "weight": 2.0}], "negative": [":("]}"#,
        )
        .unwrap();
        let lex = file.into_lexicon().unwrap();
        assert_eq!(lex.score_of("nice").pos, 1.0);
        assert_eq!(lex.score_of("stellar").pos, 2.0);
        assert_eq!(lex.score_of(":(").neg, 1.0);
        assert!(lex.emoji().contains(':') && lex.emoji().contains('('));
    }

    #[test]
    fn rejects_non_positive_weights() {
        let file: LexiconFile =
            serde_json::from_str(r#"{"negative": [{"term": "meh", "weight": 0.0}]}"#).unwrap();
        let err = file.into_lexicon().unwrap_err();
        assert!(err.to_string().contains("meh"));
    }

    #[test]
    fn rejects_blank_terms() {
        let file: LexiconFile = serde_json::from_str(r#"{"positive": ["  "]}"#).unwrap();
        assert!(file.into_lexicon().is_err());
    }

    #[test]
    fn bundled_survives_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/lexicon.json");
        let bundled = Lexicon::bundled();
        save_lexicon(&path, &LexiconFile::from_lexicon(&bundled)).unwrap();
        let loaded = load_lexicon(&path).unwrap();
        assert_eq!(loaded.len(), bundled.len());
        assert_eq!(loaded.emoji().len(), 21);
        assert_eq!(loaded.score_of("💔").neg, 1.0);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_lexicon("/definitely/not/here.json").unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }
}
