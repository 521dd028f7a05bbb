//! Built-in Fynotek dictionary tables.

/// Content roots, excluding pronouns and numerals.
pub(crate) const CONTENT_WORDS: [&str; 266] = [
    "aakem",
    "ah",
    "ahur",
    "ampu",
    "asai",
    "askan",
    "aso",
    "asoraimtau",
    "asotau",
    "atorejen",
    "atoren",
    "atymei",
    "awre",
    "awt",
    "awtakut",
    "awterfays",
    "awterfayskut",
    "awterkut",
    "awterp",
    "awtfays",
    "awtñy",
    "awtunso",
    "ayhusi",
    "easlo",
    "eiska",
    "eiskor",
    "eispo",
    "ejen",
    "ejtau",
    "ejunso",
    "emi",
    "erp",
    "etwe",
    "ewje",
    "ewnik",
    "famo",
    "fayh",
    "fays",
    "femro",
    "feñiasa",
    "feñipur",
    "feñisamlaa",
    "feñu",
    "feom",
    "fimatu",
    "fjar",
    "fjow",
    "fmutue",
    "fohusi",
    "fota",
    "fotampu",
    "fotwoetas",
    "foun",
    "fowi",
    "frie",
    "friwoetas",
    "ftylna",
    "fuh",
    "fupa",
    "hao",
    "haria",
    "hepwik",
    "hije",
    "hijkla",
    "hiks",
    "himta",
    "hituña",
    "hjapa",
    "hjeu",
    "horse",
    "huansa",
    "huasern",
    "husi",
    "hyr",
    "iasa",
    "ifiti",
    "iimmmii",
    "ikmeo",
    "ikna",
    "ilyn",
    "inhy",
    "iso",
    "iuñe",
    "iuñereun",
    "jalkeiska",
    "jalki",
    "jaoma",
    "jawe",
    "jaymka",
    "jaynasotau",
    "jaytau",
    "jeaj",
    "jem",
    "jera",
    "jerahao",
    "jetal",
    "jiwo",
    "jukse",
    "junon",
    "juon",
    "kaf",
    "kafikna",
    "kafskan",
    "kaftau",
    "kaftofa",
    "kaftofiuñe",
    "kaftofoñek",
    "kaha",
    "kemnu",
    "kiakfutejen",
    "kiakfutiuñe",
    "kiakfutreun",
    "kiakfutu",
    "kiakfutyla",
    "kimou",
    "kimpe",
    "kisak",
    "kito",
    "kjam",
    "kjekos",
    "kmafi",
    "knei",
    "kohol",
    "koli",
    "kou",
    "kui",
    "kunin",
    "kusum",
    "kut",
    "kynsi",
    "lituwle",
    "luel",
    "makio",
    "mamyo",
    "masno",
    "mawak",
    "mees",
    "meome",
    "mikip",
    "mjef",
    "mjulis",
    "mjuw",
    "mumfih",
    "mumiu",
    "muosai",
    "muyfa",
    "ñaasi",
    "najar",
    "nakuu",
    "ñawa",
    "nawpo",
    "nawtau",
    "ñeñe",
    "nesmo",
    "ninpa",
    "noaksyo",
    "nohu",
    "ñojera",
    "ñokaf",
    "nomyt",
    "noshusi",
    "ñot",
    "nowto",
    "ñuhju",
    "ñuk",
    "nyom",
    "ñytejen",
    "nytsa",
    "ñytuh",
    "oansi",
    "ofu",
    "omoa",
    "omplan",
    "oñek",
    "oñekatau",
    "oñeotnat",
    "onstana",
    "ookwy",
    "ootnat",
    "otme",
    "pamlas",
    "pasni",
    "pelwo",
    "peoka",
    "perlii",
    "pert",
    "piu",
    "plymei",
    "prios",
    "psoi",
    "puljae",
    "pyhan",
    "pykwu",
    "pyn",
    "pynsi",
    "pyum",
    "raim",
    "raimtau",
    "ralmo",
    "ralmtau",
    "ratas",
    "repsumu",
    "reun",
    "ria",
    "rikoa",
    "rjahe",
    "rjuh",
    "rouju",
    "ru",
    "safel",
    "salkina",
    "samlaa",
    "seeha",
    "sefo",
    "senkek",
    "sfoufa",
    "sihne",
    "sihneawt",
    "siofu",
    "skafas",
    "smei",
    "soatar",
    "sojeon",
    "suarn",
    "susni",
    "swie",
    "tau",
    "teipiw",
    "tek",
    "teplii",
    "tfaa",
    "tfemka",
    "tia",
    "tiisupa",
    "timohsa",
    "tinpo",
    "tlyo",
    "toaju",
    "tofa",
    "tsala",
    "tukaño",
    "tunu",
    "twauke",
    "tyñk",
    "ukea",
    "ukhin",
    "ula",
    "ulpia",
    "unso",
    "ushusi",
    "uwsafur",
    "uykan",
    "weifsa",
    "wiamta",
    "wipy",
    "woetas",
    "wyike",
    "yahan",
    "yla",
    "yñwy",
    "yren",
    "ywaaso",
    "ywakui",
    "ywaomplan",
    "ywar",
    "ywasefo",
];

/// Uninflectable words with their canonical renderings.
pub(crate) const STANDALONE_WORDS: [(&str, &str); 36] = [
    ("an", "an"),
    ("ñet", "ñeta"),
    ("ñeta", "ñeta"),
    ("oht", "ohto"),
    ("ohto", "ohto"),
    ("sta", "sta"),
    ("stayla", "sta + yla"),
    ("staula", "sta + ula"),
    ("stañy", "sta + ñy"),
    ("stañyyla", "sta + ñy + yla"),
    ("stañyula", "sta + ñy + ula"),
    ("ñy", "ñy"),
    ("ak", "ak"),
    ("i", "i"),
    ("ik", "ik"),
    ("ka", "ka"),
    ("ki", "ki"),
    ("ni", "ni"),
    ("niyla", "ni + yla"),
    ("niula", "ni + ula"),
    ("to", "to"),
    ("in", "in"),
    ("nep", "nep"),
    ("nu", "nu"),
    ("ñes", "ñes"),
    ("ñue", "ñue"),
    ("oni", "oni"),
    ("ot", "ot"),
    ("poriu", "poriu"),
    ("rek", "rek"),
    ("sy", "sy"),
    ("yf", "yf"),
    ("ew", "ew"),
    ("fao", "fao"),
    ("ewew", "ew + ew"),
    ("faofao", "fao + fao"),
];

/// Pronouns, index-aligned with [`POSSESSOR_SUFFIXES`].
pub(crate) const PRONOUNS: [&str; 14] = [
    "yumi", "yumia", "yumiame", "ñaki", "ñakime", "eji", "ejime", "yra", "yrame", "tua", "folo",
    "juon", "junon", "saraso",
];

/// Possessor suffixes, index-aligned with [`PRONOUNS`].
pub(crate) const POSSESSOR_SUFFIXES: [&str; 14] = [
    "umiy", "umii", "ami", "akiy", "imi", "ejiy", "ejimi", "yri", "yrami", "ui", "oli", "uin",
    "unin", "asi",
];

/// Numeral roots; the index is the digit value.
pub(crate) const NUMERAL_ROOTS: [&str; 6] = ["fui", "ay", "fo", "us", "nos", "pur"];

/// Positional numeral suffixes; slot `i` contributes `2^i` to the exponent.
pub(crate) const NUMERAL_SUFFIXES: [&str; 6] = ["po", "pura", "poña", "sola", "manta", "tauwa"];

/// Head of the repeatable compound.
pub(crate) const COMPOUND_HEAD: &str = "ñojera";

/// Repeatable link of the compound.
pub(crate) const COMPOUND_LINK: &str = "jera";

/// Roots whose O ablaut is verbal.
pub(crate) const VERBAL_O_ABLAUT_ROOTS: [&str; 1] = ["folo"];
