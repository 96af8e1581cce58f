//! Cyrillic/Latin grapheme table
//!
//! Entries are applied in order, in both directions. The hushing digraphs
//! (`Sch`, `Sh`, `Ch`, `Zh`) and the iotated vowels come first so that
//! reverse transliteration consumes them before their single letters.
//! `Kh` sits after `K`, so reverse transliteration turns it into `Кh`.

/// Ordered (Cyrillic, Latin) pairs
pub(crate) static TRANSLIT_TABLE: [(&str, &str); 74] = [
    ("Щ", "Sch"),
    ("Ш", "Sh"),
    ("Ч", "Ch"),
    ("Ц", "C"),
    ("Ю", "Ju"),
    ("Я", "Ja"),
    ("Ж", "Zh"),
    ("А", "A"),
    ("Б", "B"),
    ("В", "V"),
    ("Г", "G"),
    ("Д", "D"),
    ("Е", "Je"),
    ("Ё", "Jo"),
    ("З", "Z"),
    ("И", "I"),
    ("Й", "J"),
    ("І", "I"),
    ("Ї", "Ji"),
    ("Є", "Je"),
    ("Ґ", "G"),
    ("К", "K"),
    ("Л", "L"),
    ("М", "M"),
    ("Н", "N"),
    ("О", "O"),
    ("П", "P"),
    ("Р", "R"),
    ("С", "S"),
    ("Т", "T"),
    ("У", "U"),
    ("Ф", "F"),
    ("Х", "Kh"),
    ("Ъ", "'"),
    ("Ы", "Y"),
    ("Ь", "`"),
    ("Э", "E"),
    ("щ", "sch"),
    ("ш", "sh"),
    ("ч", "ch"),
    ("ц", "c"),
    ("ю", "ju"),
    ("я", "ja"),
    ("ж", "zh"),
    ("а", "a"),
    ("б", "b"),
    ("в", "v"),
    ("г", "g"),
    ("д", "d"),
    ("е", "je"),
    ("ё", "jo"),
    ("з", "z"),
    ("и", "i"),
    ("й", "j"),
    ("і", "i"),
    ("ї", "ji"),
    ("є", "je"),
    ("ґ", "g"),
    ("к", "k"),
    ("л", "l"),
    ("м", "m"),
    ("н", "n"),
    ("о", "o"),
    ("п", "p"),
    ("р", "r"),
    ("с", "s"),
    ("т", "t"),
    ("у", "u"),
    ("ф", "f"),
    ("х", "kh"),
    ("ъ", "'"),
    ("ы", "y"),
    ("ь", "`"),
    ("э", "e"),
];
