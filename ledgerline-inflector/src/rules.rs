//! Default English inflection tables.
//!
//! Rules are `(pattern, replacement)` pairs matched case-insensitively against
//! the whole word. Later entries take precedence over earlier ones.

pub(crate) const PLURALS: &[(&str, &str)] = &[
    (r"$", "s"),
    (r"s$", "s"),
    (r"^(ax|test)is$", "${1}es"),
    (r"(octop|vir)us$", "${1}i"),
    (r"(octop|vir)i$", "${1}i"),
    (r"(alias|status|bonus)$", "${1}es"),
    (r"(bu)s$", "${1}ses"),
    (r"(buffal|tomat)o$", "${1}oes"),
    (r"([ti])um$", "${1}a"),
    (r"([ti])a$", "${1}a"),
    (r"sis$", "ses"),
    (r"(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    (r"(hive)$", "${1}s"),
    (r"([^aeiouy]|qu)y$", "${1}ies"),
    (r"(x|ch|ss|sh)$", "${1}es"),
    (r"(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
    (r"^(m|l)ouse$", "${1}ice"),
    (r"^(m|l)ice$", "${1}ice"),
    (r"^(ox)$", "${1}en"),
    (r"^(oxen)$", "${1}"),
    (r"(quiz)$", "${1}zes"),
];

pub(crate) const SINGULARS: &[(&str, &str)] = &[
    (r"s$", ""),
    (r"(ss)$", "${1}"),
    (r"(n)ews$", "${1}ews"),
    (r"([ti])a$", "${1}um"),
    (
        r"((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)(sis|ses)$",
        "${1}sis",
    ),
    (r"(^analy)(sis|ses)$", "${1}sis"),
    (r"([^f])ves$", "${1}fe"),
    (r"(hive)s$", "${1}"),
    (r"(tive)s$", "${1}"),
    (r"([lr])ves$", "${1}f"),
    (r"([^aeiouy]|qu)ies$", "${1}y"),
    (r"(s)eries$", "${1}eries"),
    (r"(m)ovies$", "${1}ovie"),
    (r"(x|ch|ss|sh)es$", "${1}"),
    (r"^(m|l)ice$", "${1}ouse"),
    (r"(bus)(es)?$", "${1}"),
    (r"(o)es$", "${1}"),
    (r"(shoe)s$", "${1}"),
    (r"(cris|test)(is|es)$", "${1}is"),
    (r"^(a)x[ie]s$", "${1}xis"),
    (r"(octop|vir)(us|i)$", "${1}us"),
    (r"(alias|status|bonus)(es)?$", "${1}"),
    (r"^(ox)en", "${1}"),
    (r"(vert|ind)ices$", "${1}ex"),
    (r"(matr)ices$", "${1}ix"),
    (r"(quiz)zes$", "${1}"),
    (r"(database)s$", "${1}"),
];

/// `(singular, plural)` pairs that bypass the rule tables.
pub(crate) const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("cow", "kine"),
    ("zombie", "zombies"),
];

pub(crate) const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
];
