//! Baked-in English rule table
//!
//! Registration order is significant: later entries are prepended and
//! therefore take precedence over earlier ones.

use crate::ruleset::Ruleset;

/// Letters that take the `-fe` → `-ves` rewrite (every letter but `f`)
const FE_STEMS: &str = "abcdeghijklmnopqrstuvwxyz";

/// Consonants that take the `-y` → `-ies` rewrite
const Y_STEMS: &str = "bcdfghjklmnpqrstvwxz";

/// Plural rules registered before the generated `-fe` series
const PLURALS_HEAD: &[(&str, &str)] = &[
    ("s", "s"),
    ("testis", "testes"),
    ("axis", "axes"),
    ("octopus", "octopi"),
    ("virus", "viri"),
    ("octopi", "octopi"),
    ("viri", "viri"),
    ("alias", "aliases"),
    ("status", "statuses"),
    ("Status", "Statuses"),
    ("bus", "buses"),
    ("buffalo", "buffaloes"),
    ("tomato", "tomatoes"),
    ("tum", "ta"),
    ("ium", "ia"),
    ("ta", "ta"),
    ("ia", "ia"),
    ("sis", "ses"),
    ("lf", "lves"),
    ("rf", "rves"),
];

/// Plural rules registered after the generated `-y` series
const PLURALS_TAIL: &[(&str, &str, bool)] = &[
    ("x", "xes", false),
    ("ch", "ches", false),
    ("ss", "sses", false),
    ("sh", "shes", false),
    ("matrix", "matrices", false),
    ("vertix", "vertices", false),
    ("indix", "indices", false),
    ("matrex", "matrices", false),
    ("vertex", "vertices", false),
    ("index", "indices", false),
    ("mouse", "mice", false),
    ("louse", "lice", false),
    ("mice", "mice", false),
    ("lice", "lice", false),
    ("ress", "resses", false),
    ("ox", "oxen", true),
    ("oxen", "oxen", true),
    ("quiz", "quizzes", true),
];

/// Singular rules registered before the generated `-ves` series
const SINGULARS_HEAD: &[(&str, &str, bool)] = &[
    ("s", "", false),
    ("ss", "ss", false),
    ("news", "news", false),
    ("ta", "tum", false),
    ("ia", "ium", false),
    ("analyses", "analysis", false),
    ("bases", "basis", false),
    ("basis", "basis", true),
    ("diagnoses", "diagnosis", false),
    ("diagnosis", "diagnosis", true),
    ("parentheses", "parenthesis", false),
    ("prognoses", "prognosis", false),
    ("synopses", "synopsis", false),
    ("theses", "thesis", false),
    ("analyses", "analysis", false),
    ("analysis", "analysis", true),
];

/// Singular rules registered after the generated `-ies` series
const SINGULARS_TAIL: &[(&str, &str, bool)] = &[
    ("series", "series", false),
    ("movies", "movie", false),
    ("xes", "x", false),
    ("ches", "ch", false),
    ("sses", "ss", false),
    ("shes", "sh", false),
    ("mice", "mouse", false),
    ("lice", "louse", false),
    ("buses", "bus", false),
    ("bus", "bus", true),
    ("oes", "o", false),
    ("shoes", "shoe", false),
    ("crises", "crisis", false),
    ("crisis", "crisis", true),
    ("axes", "axis", false),
    ("axis", "axis", true),
    ("testes", "testis", false),
    ("testis", "testis", true),
    ("octopi", "octopus", false),
    ("octopus", "octopus", true),
    ("viri", "virus", false),
    ("virus", "virus", true),
    ("statuses", "status", false),
    ("Statuses", "Status", false),
    ("status", "status", true),
    ("Status", "Status", true),
    ("aliases", "alias", false),
    ("alias", "alias", true),
    ("oxen", "ox", true),
    ("vertices", "vertex", false),
    ("indices", "index", false),
    ("matrices", "matrix", false),
    ("quizzes", "quiz", true),
    ("databases", "database", false),
    ("resses", "ress", false),
    ("ress", "ress", false),
];

const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("zombie", "zombies"),
    ("Status", "Statuses"),
    ("status", "statuses"),
];

const UNCOUNTABLES: &[&str] = &[
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

/// Information technology acronyms
pub const ACRONYMS: &[&str] = &[
    "ACK", "ACL", "ADSL", "AES", "ANSI", "API", "ARP", "ATM", "BGP", "BSS", "CAT", "CCITT",
    "CHAP", "CIDR", "CIR", "CLI", "CPE", "CPU", "CRC", "CRT", "CSMA", "CMOS", "DCE", "DEC",
    "DES", "DHCP", "DNS", "DRAM", "DSL", "DSLAM", "DTE", "DMI", "EHA", "EIA", "EIGRP", "EOF",
    "ESS", "FCC", "FCS", "FDDI", "FTP", "GBIC", "gbps", "GEPOF", "HDLC", "HTTP", "HTTPS",
    "IANA", "ICMP", "IDF", "IDS", "IEEE", "IETF", "IMAP", "IP", "IPS", "ISDN", "ISP", "kbps",
    "LACP", "LAN", "LAPB", "LAPF", "LLC", "MAC", "MAN", "Mbps", "MC", "MDF", "MIB", "MoCA",
    "MPLS", "MTU", "NAC", "NAT", "NBMA", "NIC", "NRZ", "NRZI", "NVRAM", "OSI", "OSPF", "OUI",
    "PAP", "PAT", "PC", "PIM", "PCM", "PDU", "POP3", "POP", "POST", "POTS", "PPP", "PPTP",
    "PTT", "PVST", "RADIUS", "RAM", "RARP", "RFC", "RIP", "RLL", "ROM", "RSTP", "RTP", "RCP",
    "SDLC", "SFD", "SFP", "SLARP", "SLIP", "SMTP", "SNA", "SNAP", "SNMP", "SOF", "SRAM", "SSH",
    "SSID", "STP", "SYN", "TDM", "TFTP", "TIA", "TOFU", "UDP", "URL", "URI", "USB", "UTP", "VC",
    "VLAN", "VLSM", "VPN", "W3C", "WAN", "WEP", "WiFi", "WPA", "WWW",
];

/// Register the default English rules on `rs`
pub(crate) fn install(rs: &mut Ruleset) {
    for &(suffix, replacement) in PLURALS_HEAD {
        rs.add_plural(suffix, replacement);
    }
    for stem in FE_STEMS.chars() {
        rs.add_plural(format!("{stem}fe"), format!("{stem}ves"));
    }
    rs.add_plural("hive", "hives");
    rs.add_plural("quy", "quies");
    for stem in Y_STEMS.chars() {
        rs.add_plural(format!("{stem}y"), format!("{stem}ies"));
    }
    for &(suffix, replacement, exact) in PLURALS_TAIL {
        rs.add_plural_exact(suffix, replacement, exact);
    }

    for &(suffix, replacement, exact) in SINGULARS_HEAD {
        rs.add_singular_exact(suffix, replacement, exact);
    }
    for stem in FE_STEMS.chars() {
        rs.add_singular(format!("{stem}ves"), format!("{stem}fe"));
    }
    rs.add_singular("hives", "hive");
    rs.add_singular("tives", "tive");
    rs.add_singular("lves", "lf");
    rs.add_singular("rves", "rf");
    rs.add_singular("quies", "quy");
    for stem in Y_STEMS.chars() {
        rs.add_singular(format!("{stem}ies"), format!("{stem}y"));
    }
    for &(suffix, replacement, exact) in SINGULARS_TAIL {
        rs.add_singular_exact(suffix, replacement, exact);
    }

    for &(singular, plural) in IRREGULARS {
        rs.add_irregular(singular, plural);
    }
    for &word in UNCOUNTABLES {
        rs.add_uncountable(word);
    }
    for &acronym in ACRONYMS {
        rs.add_builtin_acronym(acronym);
    }
}
