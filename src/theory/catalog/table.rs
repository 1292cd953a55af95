//! Reference table of the 72 melakartas: ordinal, name and arohanam.
//!
//! The catalog is generated, not read from here; this table exists so the
//! generated catalog can be checked against the traditional numbering.

/// `(ordinal, name, arohanam)` with the arohanam as space-separated tokens.
pub const REFERENCE: [(u8, &str, &str); 72] = [
    (1, "Kanakangi", "S R1 G1 M1 P D1 N1 S'"),
    (2, "Ratnangi", "S R1 G1 M1 P D1 N2 S'"),
    (3, "Ganamurti", "S R1 G1 M1 P D1 N3 S'"),
    (4, "Vanaspati", "S R1 G1 M1 P D2 N2 S'"),
    (5, "Manavati", "S R1 G1 M1 P D2 N3 S'"),
    (6, "Tanarupi", "S R1 G1 M1 P D3 N3 S'"),
    (7, "Senavati", "S R1 G2 M1 P D1 N1 S'"),
    (8, "Hanumatodi", "S R1 G2 M1 P D1 N2 S'"),
    (9, "Dhenuka", "S R1 G2 M1 P D1 N3 S'"),
    (10, "Natakapriya", "S R1 G2 M1 P D2 N2 S'"),
    (11, "Kokilapriya", "S R1 G2 M1 P D2 N3 S'"),
    (12, "Rupavati", "S R1 G2 M1 P D3 N3 S'"),
    (13, "Gayakapriya", "S R1 G3 M1 P D1 N1 S'"),
    (14, "Vakulabharanam", "S R1 G3 M1 P D1 N2 S'"),
    (15, "Mayamalavagowla", "S R1 G3 M1 P D1 N3 S'"),
    (16, "Chakravakam", "S R1 G3 M1 P D2 N2 S'"),
    (17, "Suryakantam", "S R1 G3 M1 P D2 N3 S'"),
    (18, "Hatakambari", "S R1 G3 M1 P D3 N3 S'"),
    (19, "Jhankaradhvani", "S R2 G2 M1 P D1 N1 S'"),
    (20, "Natabhairavi", "S R2 G2 M1 P D1 N2 S'"),
    (21, "Keeravani", "S R2 G2 M1 P D1 N3 S'"),
    (22, "Kharaharapriya", "S R2 G2 M1 P D2 N2 S'"),
    (23, "Gourimanohari", "S R2 G2 M1 P D2 N3 S'"),
    (24, "Varunapriya", "S R2 G2 M1 P D3 N3 S'"),
    (25, "Mararanjani", "S R2 G3 M1 P D1 N1 S'"),
    (26, "Charukesi", "S R2 G3 M1 P D1 N2 S'"),
    (27, "Sarasangi", "S R2 G3 M1 P D1 N3 S'"),
    (28, "Harikambhoji", "S R2 G3 M1 P D2 N2 S'"),
    (29, "Dheerashankarabharanam", "S R2 G3 M1 P D2 N3 S'"),
    (30, "Naganandini", "S R2 G3 M1 P D3 N3 S'"),
    (31, "Yagapriya", "S R3 G3 M1 P D1 N1 S'"),
    (32, "Ragavardhini", "S R3 G3 M1 P D1 N2 S'"),
    (33, "Gangeyabhushani", "S R3 G3 M1 P D1 N3 S'"),
    (34, "Vagadheeswari", "S R3 G3 M1 P D2 N2 S'"),
    (35, "Shulini", "S R3 G3 M1 P D2 N3 S'"),
    (36, "Chalanata", "S R3 G3 M1 P D3 N3 S'"),
    (37, "Salagam", "S R1 G1 M2 P D1 N1 S'"),
    (38, "Jalarnavam", "S R1 G1 M2 P D1 N2 S'"),
    (39, "Jhalavarali", "S R1 G1 M2 P D1 N3 S'"),
    (40, "Navaneetam", "S R1 G1 M2 P D2 N2 S'"),
    (41, "Pavani", "S R1 G1 M2 P D2 N3 S'"),
    (42, "Raghupriya", "S R1 G1 M2 P D3 N3 S'"),
    (43, "Gavambodhi", "S R1 G2 M2 P D1 N1 S'"),
    (44, "Bhavapriya", "S R1 G2 M2 P D1 N2 S'"),
    (45, "Shubhapantuvarali", "S R1 G2 M2 P D1 N3 S'"),
    (46, "Shadvidhamargini", "S R1 G2 M2 P D2 N2 S'"),
    (47, "Suvarnangi", "S R1 G2 M2 P D2 N3 S'"),
    (48, "Divyamani", "S R1 G2 M2 P D3 N3 S'"),
    (49, "Dhavalambari", "S R1 G3 M2 P D1 N1 S'"),
    (50, "Namanarayani", "S R1 G3 M2 P D1 N2 S'"),
    (51, "Kamavardhini", "S R1 G3 M2 P D1 N3 S'"),
    (52, "Ramapriya", "S R1 G3 M2 P D2 N2 S'"),
    (53, "Gamanashrama", "S R1 G3 M2 P D2 N3 S'"),
    (54, "Vishwambari", "S R1 G3 M2 P D3 N3 S'"),
    (55, "Shyamalangi", "S R2 G2 M2 P D1 N1 S'"),
    (56, "Shanmukhapriya", "S R2 G2 M2 P D1 N2 S'"),
    (57, "Simhendramadhyamam", "S R2 G2 M2 P D1 N3 S'"),
    (58, "Hemavati", "S R2 G2 M2 P D2 N2 S'"),
    (59, "Dharmavati", "S R2 G2 M2 P D2 N3 S'"),
    (60, "Neetimati", "S R2 G2 M2 P D3 N3 S'"),
    (61, "Kantamani", "S R2 G3 M2 P D1 N1 S'"),
    (62, "Rishabhapriya", "S R2 G3 M2 P D1 N2 S'"),
    (63, "Latangi", "S R2 G3 M2 P D1 N3 S'"),
    (64, "Vachaspati", "S R2 G3 M2 P D2 N2 S'"),
    (65, "Mechakalyani", "S R2 G3 M2 P D2 N3 S'"),
    (66, "Chitrambari", "S R2 G3 M2 P D3 N3 S'"),
    (67, "Sucharitra", "S R3 G3 M2 P D1 N1 S'"),
    (68, "Jyotiswarupini", "S R3 G3 M2 P D1 N2 S'"),
    (69, "Dhatuvardhani", "S R3 G3 M2 P D1 N3 S'"),
    (70, "Nasikabhushani", "S R3 G3 M2 P D2 N2 S'"),
    (71, "Kosalam", "S R3 G3 M2 P D2 N3 S'"),
    (72, "Rasikapriya", "S R3 G3 M2 P D3 N3 S'"),
];

/// Names of the twelve chakras, each grouping six consecutive melakartas.
pub const CHAKRAS: [&str; 12] = [
    "Indu", "Netra", "Agni", "Veda", "Bana", "Rutu", "Rishi", "Vasu", "Brahma", "Disi", "Rudra",
    "Aditya",
];
