use rhymekit::{Phrase, Result};

/// Roles in the report, each with one ANSI escape.
#[derive(Debug, Clone, Copy)]
enum Style {
    Title,
    Rule,
    Note,
    Total,
    RhymeKey,
}

impl Style {
    fn escape(self) -> &'static str {
        match self {
            Style::Title => "\x1b[1;36m",
            Style::Rule => "\x1b[90m",
            Style::Note => "\x1b[2m",
            Style::Total => "\x1b[1;32m",
            Style::RhymeKey => "\x1b[33m",
        }
    }
}

struct Palette {
    color: bool,
}

impl Palette {
    fn paint(&self, s: impl AsRef<str>, style: Style) -> String {
        if self.color { format!("{}{}\x1b[0m", style.escape(), s.as_ref()) } else { s.as_ref().to_string() }
    }

    fn section(&self, title: &str) {
        println!("\n{}", self.paint(format!("━━━ {title} ━━━"), Style::Rule));
    }
}

pub fn print_phrase(phrase: &Phrase<'_>, limit: usize, color: bool) -> Result<()> {
    let palette = Palette { color };
    let text = phrase.tokens().join(" ").to_lowercase();
    println!("\n{}", palette.paint(format!("♪  Phrase: \"{text}\""), Style::Title));

    palette.section("Syllables");
    for (token, pronunciations) in phrase.tokens().iter().zip(phrase.pronunciations()) {
        let Some(first) = pronunciations.first() else { continue };
        let source = if first.is_dictionary_backed() { "dictionary" } else { "estimated" };
        println!("  {:<16} {}  {}", token.to_lowercase(), first.num_syllables(), palette.paint(source, Style::Note));
    }
    println!("  {:<16} {}", "total", palette.paint(phrase.syllables().to_string(), Style::Total));

    palette.section("Rhymes");
    if let Some(reason) = rhymes_unavailable(phrase) {
        println!("  {}", palette.paint(reason, Style::Note));
        return Ok(());
    }

    for group in phrase.rhymes()? {
        println!("  {}", palette.paint(&group.rhyme_key, Style::RhymeKey));
        if group.words.is_empty() {
            println!("    {}", palette.paint("(no rhymes)", Style::Note));
            continue;
        }
        let shown: Vec<&str> = group.words.iter().take(limit).map(String::as_str).collect();
        let hidden = group.words.len() - shown.len();
        let more = if hidden > 0 { palette.paint(format!(" (+{hidden} more)"), Style::Note) } else { String::new() };
        println!("    {}{}", shown.join(", "), more);
    }

    Ok(())
}

/// Why no rhyme groups can be listed, if that is the case.
fn rhymes_unavailable(phrase: &Phrase<'_>) -> Option<String> {
    match phrase.last_word() {
        None => Some("no words left after removing punctuation".to_string()),
        Some(word) if !phrase.is_dictionary_word() => {
            Some(format!("\"{word}\" is not in the dictionary; no rhymes available"))
        }
        Some(_) => None,
    }
}
