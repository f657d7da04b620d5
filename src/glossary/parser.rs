use nom::bytes::complete::is_not;
use nom::character::complete::char;
use nom::combinator::opt;
use nom::sequence::{preceded, terminated};
use nom::{IResult, Parser};
use tracing::debug;
use crate::core::error::{Error, Result};
use crate::core::types::{ContentSense, WordRecord};

/// Characters that open a relation-symbol sememe, e.g. `#occupation|职位`.
pub const RELATION_SYMBOLS: &str = "#%$*+&@?!";
/// Characters that open a structural (function word) entry, e.g. `{of|的}`.
pub const SPECIAL_SYMBOLS: &str = "{";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Primitive,
    RelationSymbol(char),
    Structural,
}

/// One comma-separated piece of a definition: `[key=]token[|gloss]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub key: Option<&'a str>,
    pub token: &'a str,
    pub gloss: Option<&'a str>,
}

/// Converts glossary lines (`word POS definition`) into word senses.
#[derive(Debug, Clone)]
pub struct GlossaryParser {
    pub relation_symbols: &'static str,
    pub special_symbols: &'static str,
}

// Where plain sememes go once a relation has been opened.
enum Carry {
    None,
    Relation(String),
    Symbol(char),
}

impl Default for GlossaryParser {
    fn default() -> Self {
        GlossaryParser {
            relation_symbols: RELATION_SYMBOLS,
            special_symbols: SPECIAL_SYMBOLS,
        }
    }
}

impl GlossaryParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one dictionary line. Whitespace runs are collapsed; the first two
    /// fields are the word and its POS tag, the rest is the definition.
    /// Example: `阿布扎比 N place|地方,capital|国都,ProperName|专,(the United Arab Emirates|阿拉伯联合酋长国)`
    pub fn parse_line(&self, line: &str) -> Result<WordRecord> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            return Err(Error::parse(format!(
                "expected word, POS tag and definition: {}",
                line.trim()
            )));
        }
        let definition = fields[2..].join(" ");
        self.parse_definition(fields[0], fields[1], &definition)
    }

    pub fn parse_definition(&self, word: &str, pos: &str, definition: &str) -> Result<WordRecord> {
        let mut sense = ContentSense::default();
        let mut structural = Vec::new();
        let mut carry = Carry::None;

        for part in definition.split(',') {
            let part = strip_parens(part.trim());
            let segment = parse_segment(part)?;

            if let Some(key) = segment.key {
                let value = value_of(&segment, segment.token)?;
                sense.add_relational(key, value);
                carry = Carry::Relation(key.to_string());
                continue;
            }

            match self.classify(segment.token) {
                SegmentKind::RelationSymbol(symbol) => {
                    let bare = &segment.token[symbol.len_utf8()..];
                    let value = value_of(&segment, bare)?;
                    sense.add_relation_symbol(symbol, value);
                    carry = Carry::Symbol(symbol);
                }
                SegmentKind::Structural => {
                    let bare = segment.token.trim_start_matches('{').trim_end_matches('}');
                    structural.push(value_of(&segment, bare)?.to_string());
                }
                SegmentKind::Primitive => {
                    let value = value_of(&segment, segment.token)?;
                    match &carry {
                        Carry::Relation(key) => sense.add_relational(key, value),
                        Carry::Symbol(symbol) => sense.add_relation_symbol(*symbol, value),
                        Carry::None if sense.first_primitive.is_none() => {
                            sense.first_primitive = Some(value.to_string());
                        }
                        Carry::None => sense.add_other(value),
                    }
                }
            }
        }

        if structural.is_empty() {
            return Ok(WordRecord::content(word, pos, sense));
        }
        if sense != ContentSense::default() {
            debug!(word, "structural entry also lists content sememes; keeping structural words only");
        }
        Ok(WordRecord::structural(word, pos, structural))
    }

    pub fn classify(&self, token: &str) -> SegmentKind {
        match token.chars().next() {
            Some(c) if self.relation_symbols.contains(c) => SegmentKind::RelationSymbol(c),
            Some(c) if self.special_symbols.contains(c) => SegmentKind::Structural,
            _ => SegmentKind::Primitive,
        }
    }
}

fn relation_key(input: &str) -> IResult<&str, &str> {
    terminated(is_not("=|"), char('=')).parse(input)
}

fn token(input: &str) -> IResult<&str, &str> {
    is_not("|").parse(input)
}

fn gloss(input: &str) -> IResult<&str, Option<&str>> {
    preceded(char('|'), opt(is_not("|"))).parse(input)
}

fn segment(input: &str) -> IResult<&str, Segment<'_>> {
    (opt(relation_key), token, opt(gloss))
        .map(|(key, token, gloss)| Segment {
            key,
            token,
            gloss: gloss.flatten(),
        })
        .parse(input)
}

pub fn parse_segment(input: &str) -> Result<Segment<'_>> {
    let (remaining, parsed) =
        segment(input).map_err(|e| Error::parse(format!("bad segment '{}': {}", input, e)))?;
    if !remaining.is_empty() {
        return Err(Error::parse(format!("more than one '|' in segment '{}'", input)));
    }
    if parsed.token.contains('=') {
        return Err(Error::parse(format!("more than one '=' in segment '{}'", input)));
    }
    Ok(parsed)
}

// `(Bahrain|巴林)` marks a concrete word rather than a sememe.
fn strip_parens(part: &str) -> &str {
    match part.strip_prefix('(') {
        Some(inner) => inner.strip_suffix(')').unwrap_or(inner),
        None => part,
    }
}

// Gloss when present, else the fallback token; one trailing `)` or `}` dropped.
fn value_of<'a>(segment: &Segment<'a>, fallback: &'a str) -> Result<&'a str> {
    let raw = segment.gloss.unwrap_or(fallback);
    let value = raw
        .strip_suffix(')')
        .or_else(|| raw.strip_suffix('}'))
        .unwrap_or(raw)
        .trim();
    if value.is_empty() {
        return Err(Error::parse(format!("empty value in segment '{}'", segment.token)));
    }
    Ok(value)
}
