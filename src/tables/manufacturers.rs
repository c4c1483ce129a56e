//! WMI manufacturer prefix assignments.
//!
//! Prefixes are 2 or 3 characters over VIN positions 1–3, compiled from the
//! public WMI registry. The list is sorted for binary search; 2-character
//! entries act as fallbacks when no exact 3-character assignment exists
//! (see [`crate::decode::manufacturer`]).

/// Look up a manufacturer by exact prefix (2 or 3 characters).
pub fn manufacturer(prefix: &str) -> Option<&'static str> {
    MANUFACTURERS
        .binary_search_by_key(&prefix, |&(code, _)| code)
        .ok()
        .map(|i| MANUFACTURERS[i].1)
}

/// `(prefix, manufacturer)` pairs, sorted by prefix.
pub static MANUFACTURERS: &[(&str, &str)] = &[
    ("1B", "Dodge"),
    ("1C", "Chrysler"),
    ("1D", "Dodge"),
    ("1F", "Ford"),
    ("1FA", "Ford"),
    ("1FB", "Ford"),
    ("1FC", "Ford"),
    ("1FD", "Ford"),
    ("1FM", "Ford"),
    ("1FT", "Ford"),
    ("1FU", "Freightliner"),
    ("1FV", "Freightliner"),
    ("1G", "General Motors"),
    ("1G1", "Chevrolet"),
    ("1G2", "Pontiac"),
    ("1G3", "Oldsmobile"),
    ("1G4", "Buick"),
    ("1G6", "Cadillac"),
    ("1GC", "Chevrolet"),
    ("1GM", "Pontiac"),
    ("1GT", "GMC"),
    ("1GY", "Cadillac"),
    ("1H", "Honda"),
    ("1HD", "Harley-Davidson"),
    ("1J4", "Jeep"),
    ("1J8", "Jeep"),
    ("1L", "Lincoln"),
    ("1M1", "Mack"),
    ("1M2", "Mack"),
    ("1ME", "Mercury"),
    ("1N", "Nissan"),
    ("1NX", "Toyota"),
    ("1VW", "Volkswagen"),
    ("1XK", "Kenworth"),
    ("1XP", "Peterbilt"),
    ("1YV", "Mazda"),
    ("2A4", "Chrysler"),
    ("2C3", "Chrysler"),
    ("2D3", "Dodge"),
    ("2FA", "Ford"),
    ("2FB", "Ford"),
    ("2FC", "Ford"),
    ("2FM", "Ford"),
    ("2FT", "Ford"),
    ("2G1", "Chevrolet"),
    ("2G2", "Pontiac"),
    ("2G4", "Buick"),
    ("2HG", "Honda"),
    ("2HJ", "Honda"),
    ("2HK", "Honda"),
    ("2HM", "Hyundai"),
    ("2M", "Mercury"),
    ("2T", "Toyota"),
    ("3C4", "Chrysler"),
    ("3C6", "Ram"),
    ("3D3", "Dodge"),
    ("3FA", "Ford"),
    ("3FE", "Ford"),
    ("3G1", "Chevrolet"),
    ("3GN", "Chevrolet"),
    ("3HG", "Honda"),
    ("3HM", "Honda"),
    ("3MD", "Mazda"),
    ("3MZ", "Mazda"),
    ("3N", "Nissan"),
    ("3N1", "Nissan"),
    ("3N6", "Nissan"),
    ("3VW", "Volkswagen"),
    ("4F", "Mazda"),
    ("4JG", "Mercedes-Benz"),
    ("4M", "Mercury"),
    ("4S3", "Subaru"),
    ("4S4", "Subaru"),
    ("4T1", "Toyota"),
    ("4T3", "Toyota"),
    ("4US", "BMW"),
    ("4V1", "Volvo"),
    ("5FN", "Honda"),
    ("5L", "Lincoln"),
    ("5N1", "Nissan"),
    ("5NP", "Hyundai"),
    ("5TB", "Toyota"),
    ("5TD", "Toyota"),
    ("5TE", "Toyota"),
    ("5TF", "Toyota"),
    ("5UX", "BMW"),
    ("5YJ", "Tesla"),
    ("6FP", "Ford"),
    ("6G1", "Holden"),
    ("6H8", "Holden"),
    ("6MM", "Mitsubishi"),
    ("6T1", "Toyota"),
    ("8AD", "Volkswagen"),
    ("8AF", "Ford"),
    ("8AG", "Chevrolet"),
    ("8AJ", "Toyota"),
    ("8AK", "Suzuki"),
    ("8AP", "Fiat"),
    ("8AW", "Volkswagen"),
    ("935", "Citroën"),
    ("936", "Peugeot"),
    ("93H", "Honda"),
    ("93U", "Audi"),
    ("93Y", "Renault"),
    ("9BF", "Ford"),
    ("9BG", "Chevrolet"),
    ("9BM", "Mercedes-Benz"),
    ("9BR", "Toyota"),
    ("9BS", "Scania"),
    ("9BW", "Volkswagen"),
    ("9C2", "Honda"),
    ("9FB", "Renault"),
    ("JA", "Isuzu"),
    ("JA3", "Mitsubishi"),
    ("JA4", "Mitsubishi"),
    ("JD", "Daihatsu"),
    ("JF", "Subaru"),
    ("JF1", "Subaru"),
    ("JF2", "Subaru"),
    ("JH", "Honda"),
    ("JH4", "Acura"),
    ("JHM", "Honda"),
    ("JK", "Kawasaki"),
    ("JM", "Mazda"),
    ("JM1", "Mazda"),
    ("JMB", "Mitsubishi"),
    ("JMY", "Mitsubishi"),
    ("JMZ", "Mazda"),
    ("JN", "Nissan"),
    ("JN1", "Nissan"),
    ("JN6", "Nissan"),
    ("JN8", "Nissan"),
    ("JS", "Suzuki"),
    ("JS1", "Suzuki"),
    ("JS2", "Suzuki"),
    ("JT", "Toyota"),
    ("JTH", "Lexus"),
    ("JTJ", "Lexus"),
    ("JY", "Yamaha"),
    ("JYA", "Yamaha"),
    ("KL", "Daewoo"),
    ("KLA", "Daewoo"),
    ("KM", "Hyundai"),
    ("KM8", "Hyundai"),
    ("KMH", "Hyundai"),
    ("KN", "Kia"),
    ("KNA", "Kia"),
    ("KND", "Kia"),
    ("KNM", "Renault Samsung"),
    ("KPA", "SsangYong"),
    ("KPT", "SsangYong"),
    ("LBV", "BMW"),
    ("LFV", "Volkswagen"),
    ("LGB", "Nissan"),
    ("LSG", "General Motors"),
    ("LSV", "Volkswagen"),
    ("LTV", "Toyota"),
    ("LVS", "Ford"),
    ("LZW", "Wuling"),
    ("MA1", "Mahindra"),
    ("MA3", "Suzuki"),
    ("MAJ", "Ford"),
    ("MAK", "Honda"),
    ("MAL", "Hyundai"),
    ("MAT", "Tata"),
    ("MHF", "Toyota"),
    ("MHR", "Honda"),
    ("MM8", "Mazda"),
    ("MMB", "Mitsubishi"),
    ("MMT", "Mitsubishi"),
    ("MNB", "Ford"),
    ("MR0", "Toyota"),
    ("NAA", "Iran Khodro"),
    ("NLE", "Mercedes-Benz"),
    ("NM0", "Ford"),
    ("NMT", "Toyota"),
    ("PL1", "Proton"),
    ("SAJ", "Jaguar"),
    ("SAL", "Land Rover"),
    ("SAR", "Rover"),
    ("SB1", "Toyota"),
    ("SBM", "McLaren"),
    ("SCA", "Rolls-Royce"),
    ("SCB", "Bentley"),
    ("SCC", "Lotus"),
    ("SCE", "DeLorean"),
    ("SCF", "Aston Martin"),
    ("SHH", "Honda"),
    ("SHS", "Honda"),
    ("SJN", "Nissan"),
    ("TMA", "Hyundai"),
    ("TMB", "Škoda"),
    ("TRU", "Audi"),
    ("TSM", "Suzuki"),
    ("U5Y", "Kia"),
    ("UU1", "Dacia"),
    ("VF1", "Renault"),
    ("VF3", "Peugeot"),
    ("VF6", "Renault Trucks"),
    ("VF7", "Citroën"),
    ("VS6", "Ford"),
    ("VSS", "SEAT"),
    ("VSX", "Opel"),
    ("W0L", "Opel"),
    ("W0V", "Opel"),
    ("WA1", "Audi"),
    ("WAU", "Audi"),
    ("WBA", "BMW"),
    ("WBS", "BMW"),
    ("WBY", "BMW"),
    ("WDB", "Mercedes-Benz"),
    ("WDC", "Mercedes-Benz"),
    ("WDD", "Mercedes-Benz"),
    ("WDF", "Mercedes-Benz"),
    ("WF0", "Ford"),
    ("WJM", "Iveco"),
    ("WMA", "MAN"),
    ("WME", "Smart"),
    ("WMW", "Mini"),
    ("WP0", "Porsche"),
    ("WP1", "Porsche"),
    ("WUA", "Audi"),
    ("WV1", "Volkswagen"),
    ("WV2", "Volkswagen"),
    ("WV3", "Volkswagen"),
    ("WVG", "Volkswagen"),
    ("WVW", "Volkswagen"),
    ("XL9", "Spyker"),
    ("XLR", "DAF"),
    ("XTA", "Lada"),
    ("XW8", "Volkswagen"),
    ("YS2", "Scania"),
    ("YS3", "Saab"),
    ("YT9", "Koenigsegg"),
    ("YV1", "Volvo"),
    ("YV2", "Volvo"),
    ("YV3", "Volvo"),
    ("ZA9", "Bugatti"),
    ("ZAM", "Maserati"),
    ("ZAP", "Piaggio"),
    ("ZAR", "Alfa Romeo"),
    ("ZCF", "Iveco"),
    ("ZD4", "Aprilia"),
    ("ZDM", "Ducati"),
    ("ZFA", "Fiat"),
    ("ZFF", "Ferrari"),
    ("ZHW", "Lamborghini"),
    ("ZLA", "Lancia"),];
