//! LaTeX character decoding
//!
//! Decodes LaTeX accents, symbols and formatting commands in field values to
//! Unicode and removes grouping braces. Dash ligatures (`--`, `---`) and `~`
//! are left alone; turning those into typographic characters is a display
//! concern of the report renderers.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use unicode_normalization::UnicodeNormalization;

/// Decode LaTeX markup in `input` to NFC-normalized Unicode
pub fn decode_latex(input: &str) -> String {
    if !input.contains('\\') && !input.contains('{') && !input.contains('`') {
        return input.nfc().collect();
    }

    let mut result = input.to_string();

    for (pattern, replacement) in ALL_PATTERNS.iter() {
        if result.contains(pattern) {
            result = result.replace(pattern, replacement);
        }
    }

    result = decode_letter_commands(&result);
    result = remove_tex_commands(&result);
    strip_braces(&result).nfc().collect()
}

// ===== Accent Patterns =====

lazy_static! {
    static ref ACCENT_PATTERNS: Vec<(&'static str, &'static str)> = vec![
        // Umlaut (diaeresis)
        ("\\\"a", "ä"), ("\\\"A", "Ä"),
        ("\\\"e", "ë"), ("\\\"E", "Ë"),
        ("\\\"i", "ï"), ("\\\"I", "Ï"),
        ("\\\"o", "ö"), ("\\\"O", "Ö"),
        ("\\\"u", "ü"), ("\\\"U", "Ü"),
        ("\\\"y", "ÿ"),
        ("\\\"{a}", "ä"), ("\\\"{A}", "Ä"),
        ("\\\"{e}", "ë"), ("\\\"{E}", "Ë"),
        ("\\\"{i}", "ï"), ("\\\"{\\i}", "ï"),
        ("\\\"{o}", "ö"), ("\\\"{O}", "Ö"),
        ("\\\"{u}", "ü"), ("\\\"{U}", "Ü"),

        // Acute accent
        ("\\'a", "á"), ("\\'A", "Á"),
        ("\\'e", "é"), ("\\'E", "É"),
        ("\\'i", "í"), ("\\'I", "Í"),
        ("\\'o", "ó"), ("\\'O", "Ó"),
        ("\\'u", "ú"), ("\\'U", "Ú"),
        ("\\'y", "ý"), ("\\'Y", "Ý"),
        ("\\'c", "ć"), ("\\'n", "ń"), ("\\'s", "ś"), ("\\'z", "ź"),
        ("\\'{a}", "á"), ("\\'{A}", "Á"),
        ("\\'{e}", "é"), ("\\'{E}", "É"),
        ("\\'{i}", "í"), ("\\'{\\i}", "í"),
        ("\\'{o}", "ó"), ("\\'{O}", "Ó"),
        ("\\'{u}", "ú"), ("\\'{U}", "Ú"),
        ("\\'{c}", "ć"), ("\\'{n}", "ń"), ("\\'{s}", "ś"), ("\\'{z}", "ź"),

        // Grave accent
        ("\\`a", "à"), ("\\`A", "À"),
        ("\\`e", "è"), ("\\`E", "È"),
        ("\\`i", "ì"), ("\\`o", "ò"), ("\\`u", "ù"),
        ("\\`{a}", "à"), ("\\`{A}", "À"),
        ("\\`{e}", "è"), ("\\`{E}", "È"),
        ("\\`{o}", "ò"), ("\\`{u}", "ù"),

        // Circumflex
        ("\\^a", "â"), ("\\^e", "ê"), ("\\^i", "î"), ("\\^o", "ô"), ("\\^u", "û"),
        ("\\^{a}", "â"), ("\\^{e}", "ê"), ("\\^{\\i}", "î"), ("\\^{o}", "ô"), ("\\^{u}", "û"),

        // Tilde
        ("\\~a", "ã"), ("\\~n", "ñ"), ("\\~N", "Ñ"), ("\\~o", "õ"),
        ("\\~{a}", "ã"), ("\\~{n}", "ñ"), ("\\~{N}", "Ñ"), ("\\~{o}", "õ"),

        // Cedilla
        ("\\c c", "ç"), ("\\c C", "Ç"),
        ("\\c{c}", "ç"), ("\\c{C}", "Ç"),
        ("\\c s", "ş"), ("\\c{s}", "ş"),

        // Ring
        ("\\r a", "å"), ("\\r A", "Å"),
        ("\\r{a}", "å"), ("\\r{A}", "Å"),

        // Caron
        ("\\v c", "č"), ("\\v C", "Č"),
        ("\\v s", "š"), ("\\v S", "Š"),
        ("\\v z", "ž"), ("\\v Z", "Ž"),
        ("\\v r", "ř"), ("\\v e", "ě"),
        ("\\v{c}", "č"), ("\\v{C}", "Č"),
        ("\\v{s}", "š"), ("\\v{S}", "Š"),
        ("\\v{z}", "ž"), ("\\v{Z}", "Ž"),
        ("\\v{r}", "ř"), ("\\v{e}", "ě"),

        // Macron
        ("\\=a", "ā"), ("\\=e", "ē"), ("\\=o", "ō"), ("\\=u", "ū"),
        ("\\={a}", "ā"), ("\\={e}", "ē"), ("\\={o}", "ō"), ("\\={u}", "ū"),

        // Dot above, ogonek, double acute
        ("\\.z", "ż"), ("\\.{z}", "ż"), ("\\.Z", "Ż"), ("\\.{Z}", "Ż"),
        ("\\k{a}", "ą"), ("\\k{e}", "ę"),
        ("\\H{o}", "ő"), ("\\H{u}", "ű"),
    ];
}

// ===== Special Characters =====

lazy_static! {
    static ref SPECIAL_CHARACTERS: Vec<(&'static str, &'static str)> = vec![
        ("``", "\u{201C}"),
        ("''", "\u{201D}"),
        ("\\&", "&"),
        ("\\%", "%"),
        ("\\$", "$"),
        ("\\#", "#"),
        ("\\_", "_"),
        ("\\textendash", "\u{2013}"),
        ("\\textemdash", "\u{2014}"),
        ("\\textasciitilde", "\u{02DC}"),
        ("\\copyright", "©"),
        ("\\textregistered", "®"),
        ("\\texttrademark", "™"),
        ("\\textbullet", "•"),
        ("\\ldots", "…"),
        ("\\dots", "…"),
    ];

    static ref MATH_SYMBOLS: Vec<(&'static str, &'static str)> = vec![
        ("\\alpha", "α"), ("\\beta", "β"), ("\\gamma", "γ"),
        ("\\delta", "δ"), ("\\epsilon", "ε"), ("\\theta", "θ"),
        ("\\lambda", "λ"), ("\\mu", "μ"), ("\\pi", "π"),
        ("\\sigma", "σ"), ("\\phi", "φ"), ("\\omega", "ω"),
        ("\\Gamma", "Γ"), ("\\Delta", "Δ"), ("\\Sigma", "Σ"),
        ("\\Phi", "Φ"), ("\\Omega", "Ω"),
        ("\\times", "×"), ("\\pm", "±"), ("\\cdot", "·"),
        ("\\leq", "≤"), ("\\geq", "≥"), ("\\neq", "≠"),
        ("\\approx", "≈"), ("\\infty", "∞"), ("\\rightarrow", "→"),
    ];

    /// Combined patterns, longest first so `\'{\i}` wins over `\'i`
    static ref ALL_PATTERNS: Vec<(&'static str, &'static str)> = {
        let mut patterns: Vec<(&str, &str)> = Vec::new();
        patterns.extend(ACCENT_PATTERNS.iter().copied());
        patterns.extend(SPECIAL_CHARACTERS.iter().copied());
        patterns.extend(MATH_SYMBOLS.iter().copied());
        patterns.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        patterns
    };
}

// ===== Letter Commands =====

lazy_static! {
    // Control words that stand for a single letter. They only match when the
    // command name ends, so `\o` does not eat the start of `\omega`.
    static ref LETTER_COMMAND: Regex =
        Regex::new(r"\\(aa|AA|ae|AE|oe|OE|ss|l|L|o|O|i)(\{\}|\s+|[^a-zA-Z]|$)").unwrap();
}

fn letter_for(command: &str) -> &'static str {
    match command {
        "aa" => "å",
        "AA" => "Å",
        "ae" => "æ",
        "AE" => "Æ",
        "oe" => "œ",
        "OE" => "Œ",
        "ss" => "ß",
        "l" => "ł",
        "L" => "Ł",
        "o" => "ø",
        "O" => "Ø",
        _ => "ı",
    }
}

fn decode_letter_commands(input: &str) -> String {
    LETTER_COMMAND
        .replace_all(input, |caps: &Captures| {
            let terminator = &caps[2];
            let kept = if terminator == "{}" || terminator.trim().is_empty() {
                ""
            } else {
                terminator
            };
            format!("{}{}", letter_for(&caps[1]), kept)
        })
        .into_owned()
}

// ===== TeX Command Removal =====

lazy_static! {
    // Any remaining `\command{content}` keeps its content
    static ref GENERIC_COMMAND: Regex = Regex::new(r"\\[a-zA-Z]+\{([^}]*)\}").unwrap();
}

fn remove_tex_commands(input: &str) -> String {
    GENERIC_COMMAND.replace_all(input, "$1").into_owned()
}

/// Drop grouping braces; escaped `\{` and `\}` become literal braces
fn strip_braces(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if matches!(chars.peek(), Some('{') | Some('}')) => {
                if let Some(brace) = chars.next() {
                    result.push(brace);
                }
            }
            '{' | '}' => {}
            _ => result.push(c),
        }
    }

    result
}
