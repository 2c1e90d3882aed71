// Greyscale rendering with a 4 module quiet zone, 3 pixels per module
fn render(qr: &qrsmith::QR) -> (usize, Vec<u8>) {
    let (w, quiet, scale) = (qr.width(), 4, 3);
    let side = (w + 2 * quiet) * scale;
    let modules = qr.to_ternary();
    let mut pixels = vec![255; side * side];
    for (i, &m) in modules.iter().enumerate() {
        if m != 1 {
            continue;
        }
        let (r, c) = ((i / w + quiet) * scale, (i % w + quiet) * scale);
        for y in r..r + scale {
            pixels[y * side + c..y * side + c + scale].fill(0);
        }
    }
    (side, pixels)
}

fn decode(qr: &qrsmith::QR) -> (rqrr::MetaData, String) {
    let (side, pixels) = render(qr);
    let mut img =
        rqrr::PreparedImage::prepare_from_greyscale(side, side, |x, y| pixels[y * side + x]);
    let grids = img.detect_grids();
    assert_eq!(grids.len(), 1, "Expected exactly one symbol");
    grids[0].decode().expect("Failed to read QR")
}

// Raw payload bytes, for content that isn't UTF-8
fn decode_bytes(qr: &qrsmith::QR) -> (rqrr::MetaData, Vec<u8>) {
    let (side, pixels) = render(qr);
    let mut img =
        rqrr::PreparedImage::prepare_from_greyscale(side, side, |x, y| pixels[y * side + x]);
    let grids = img.detect_grids();
    assert_eq!(grids.len(), 1, "Expected exactly one symbol");
    let mut content = Vec::new();
    let meta = grids[0].decode_to(&mut content).expect("Failed to read QR");
    (meta, content)
}

#[cfg(test)]
mod qr_proptests {

    use prop::string::string_regex;
    use proptest::prelude::*;

    use qrsmith::*;

    use super::decode;

    pub fn ec_level_strategy() -> BoxedStrategy<ECLevel> {
        prop_oneof![Just(ECLevel::L), Just(ECLevel::M), Just(ECLevel::Q), Just(ECLevel::H)].boxed()
    }

    pub fn qr_strategy(regex: String) -> impl Strategy<Value = (ECLevel, String)> {
        ec_level_strategy().prop_flat_map(move |ecl| {
            // Kept small so every case stays cheap to detect
            let max_sz = match ecl {
                ECLevel::L => 300,
                ECLevel::M => 240,
                ECLevel::Q => 170,
                ECLevel::H => 130,
            };
            let pattern = format!(r"{regex}{{1,{max_sz}}}");
            string_regex(&pattern).unwrap().prop_map(move |data| (ecl, data))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn proptest_numeric(params in qr_strategy("[0-9]".to_string())) {
            let (ecl, data) = params;

            let qr = QRBuilder::new(data.as_bytes()).ec_level(ecl).build().unwrap();
            let (_meta, decoded) = decode(&qr);

            prop_assert_eq!(data, decoded);
        }

        #[test]
        fn proptest_alphanumeric(params in qr_strategy(r"[0-9A-Z $%*+\-./:]".to_string())) {
            let (ecl, data) = params;

            let qr = QRBuilder::new(data.as_bytes()).ec_level(ecl).build().unwrap();
            let (_meta, decoded) = decode(&qr);

            prop_assert_eq!(data, decoded);
        }

        #[test]
        fn proptest_byte(params in qr_strategy("[a-z0-9 ,.!?]".to_string())) {
            let (ecl, data) = params;

            let qr = QRBuilder::new(data.as_bytes()).ec_level(ecl).build().unwrap();
            let (_meta, decoded) = decode(&qr);

            prop_assert_eq!(data, decoded);
        }
    }
}

#[cfg(test)]
mod qr_tests {
    use rayon::prelude::*;
    use test_case::test_case;

    use qrsmith::{
        build_final_message, build_matrix, create_symbol, encode_data, initialize_tables,
        release_symbol, ECLevel, GaloisField, GeneratorPolynomials, MaskPattern, Mode, QRBuilder,
        QRError, Tables, Version,
    };

    use super::{decode, decode_bytes};

    // Format info carries L as 1, M as 0, Q as 3, H as 2
    fn format_bits(ecl: ECLevel) -> u16 {
        match ecl {
            ECLevel::L => 1,
            ECLevel::M => 0,
            ECLevel::Q => 3,
            ECLevel::H => 2,
        }
    }

    #[test_case("Hello, world!🌎".to_string(), 1, ECLevel::L; "test_qr_1")]
    #[test_case("TEST".to_string(), 1, ECLevel::M; "test_qr_2")]
    #[test_case("12345".to_string(), 1, ECLevel::Q; "test_qr_3")]
    #[test_case("OK".to_string(), 1, ECLevel::H; "test_qr_4")]
    #[test_case("B3@j🎮#Z%8v🍣K!🔑3zC^8📖&r".repeat(3), 7, ECLevel::L; "test_qr_5")]
    #[test_case("A11111111111111".repeat(11), 7, ECLevel::M; "test_qr_6")]
    #[test_case("aAAAAAA1111111111111AAAAAAa".repeat(3), 7, ECLevel::Q; "test_qr_7")]
    #[test_case("1234567890".repeat(15), 7, ECLevel::H; "test_qr_8")]
    #[test_case("A111111111111111".repeat(100), 27, ECLevel::M; "test_qr_9")]
    #[test_case("1234567890".repeat(305), 40, ECLevel::H; "test_qr_10")]
    #[test_case("aA00000298542515764186657331886415260738886433510273480049978764987230758543376676257538587037428591120694472658573041637".to_string(), 7, ECLevel::L; "test_qr_11")]
    fn test_qr(data: String, ver: u8, ecl: ECLevel) {
        let qr = QRBuilder::new(data.as_bytes())
            .version(Version::new(ver).unwrap())
            .ec_level(ecl)
            .build()
            .unwrap();

        let (meta, decoded) = decode(&qr);

        assert_eq!(meta.version.0, ver as usize);
        assert_eq!(meta.ecc_level, format_bits(ecl));
        assert_eq!(meta.mask, qr.mask().unwrap().index() as u16);
        assert_eq!(data, decoded);
    }

    #[test]
    fn test_qr_long_numeric() {
        let data = "000003102240522040101032134589200040100032256802000001000230031030100051322320302010102287757583444005058202946794230192593114436932953370175316685191098675305648442486981451187345202833326821009949644832254029455434265792710428622979190276282956185887462621840559174608893562970842263910702908981904037304248915".to_string();

        let qr = QRBuilder::new(data.as_bytes()).ec_level(ECLevel::M).build().unwrap();
        let (_meta, decoded) = decode(&qr);

        assert_eq!(data, decoded);
    }

    #[test_case(MaskPattern::Checkerboard)]
    #[test_case(MaskPattern::HorizontalLines)]
    #[test_case(MaskPattern::VerticalLines)]
    #[test_case(MaskPattern::DiagonalLines)]
    #[test_case(MaskPattern::LargeCheckerboard)]
    #[test_case(MaskPattern::Fields)]
    #[test_case(MaskPattern::Diamonds)]
    #[test_case(MaskPattern::Meadow)]
    fn test_qr_every_mask(mask: MaskPattern) {
        let data = "Every mask decodes";
        let qr = QRBuilder::new(data.as_bytes()).ec_level(ECLevel::Q).mask(mask).build().unwrap();
        let (meta, decoded) = decode(&qr);

        assert_eq!(meta.mask, mask.index() as u16);
        assert_eq!(data, decoded);
    }

    #[test]
    fn test_symbol_pipeline() {
        let tables = initialize_tables();
        let data = "STEP BY STEP 123";
        for ecl in ECLevel::ALL {
            let mut symbol = create_symbol(2, ecl).unwrap();
            encode_data(data.as_bytes(), Mode::Alphanumeric, &mut symbol).unwrap();
            let stream = build_final_message(&tables, &symbol).unwrap();
            let qr = build_matrix(symbol.version(), symbol.ec_level(), None, &stream).unwrap();
            release_symbol(symbol);

            let (meta, decoded) = decode(&qr);
            assert_eq!(meta.version.0, 2);
            assert_eq!(data, decoded);
        }
    }

    #[test]
    fn test_pipeline_matches_builder() {
        let tables = initialize_tables();
        let data = b"pipeline and builder agree";
        let ver = Version::new(4).unwrap();

        let mut symbol = create_symbol(4, ECLevel::H).unwrap();
        encode_data(data, Mode::Byte, &mut symbol).unwrap();
        let stream = build_final_message(&tables, &symbol).unwrap();
        let manual = build_matrix(ver, ECLevel::H, None, &stream).unwrap();

        let built = QRBuilder::new(data).version(ver).ec_level(ECLevel::H).build().unwrap();
        assert_eq!(manual, built);
    }

    #[test]
    fn test_eci_header_costs_capacity() {
        // 17 bytes fill version 1-L, the 12 bit ECI header pushes them to version 2
        let data = b"Seventeen bytes!!";
        let plain = QRBuilder::new(data).ec_level(ECLevel::L).build().unwrap();
        let eci = QRBuilder::new(data).ec_level(ECLevel::L).eci(26).build().unwrap();

        assert_eq!(*plain.version(), 1);
        assert_eq!(*eci.version(), 2);
    }

    #[test_case(3)]
    #[test_case(26)]
    #[test_case(1000)]
    fn test_eci_round_trip(designator: u32) {
        let data = "hello eci";
        let qr = QRBuilder::new(data.as_bytes()).eci(designator).build().unwrap();
        let (_meta, decoded) = decode_bytes(&qr);

        assert_eq!(decoded, data.as_bytes());
    }

    #[test]
    fn test_eci_utf8_decodes_as_text() {
        let data = "hello eci";
        let qr = QRBuilder::new(data.as_bytes()).eci(26).build().unwrap();
        let (_meta, decoded) = decode(&qr);

        assert_eq!(decoded, data);
    }

    #[test]
    fn test_kanji_round_trip() {
        // 点 茗 and the first and last double bytes of the kanji range
        let data = [0x93, 0x5F, 0xE4, 0xAA, 0x81, 0x40, 0xEB, 0xBF];
        for ecl in ECLevel::ALL {
            let qr = QRBuilder::new(&data).ec_level(ecl).mode(Mode::Kanji).build().unwrap();
            let (meta, decoded) = decode_bytes(&qr);

            assert_eq!(meta.version.0, 1);
            assert_eq!(decoded, data);
        }
    }

    #[test]
    fn test_kanji_pipeline_round_trip() {
        let tables = initialize_tables();
        let data = [0x93, 0x5F, 0xE4, 0xAA];
        let mut symbol = create_symbol(1, ECLevel::Q).unwrap();
        encode_data(&data, Mode::Kanji, &mut symbol).unwrap();
        let stream = build_final_message(&tables, &symbol).unwrap();
        let qr = build_matrix(symbol.version(), symbol.ec_level(), None, &stream).unwrap();

        assert_eq!(decode_bytes(&qr).1, data);
        assert_eq!(encode_data(&[0x82, 0x20], Mode::Kanji, &mut symbol), Err(QRError::InvalidChar));
    }

    #[test]
    fn test_tables_from_parts() {
        let tables = Tables::shared();
        let gf: &GaloisField = tables.field();
        let gens: &GeneratorPolynomials = tables.generators();

        assert_eq!(gf, &GaloisField::new());
        assert_eq!(gens, &GeneratorPolynomials::new(gf));
        assert_eq!(gens.get(7).unwrap(), [0, 87, 229, 146, 149, 238, 102, 21]);
    }

    #[test]
    fn test_concurrent_builds_share_tables() {
        let tables = Tables::shared();
        let inputs = (0..64).map(|i| format!("Concurrent symbol #{i}")).collect::<Vec<_>>();

        let parallel = inputs
            .par_iter()
            .map(|d| QRBuilder::new(d.as_bytes()).build_with(tables).unwrap())
            .collect::<Vec<_>>();
        let sequential = inputs
            .iter()
            .map(|d| QRBuilder::new(d.as_bytes()).build_with(tables).unwrap())
            .collect::<Vec<_>>();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_grid_is_finalized() {
        for ver in [1, 6, 7, 21, 40] {
            let qr = QRBuilder::new(b"0").version(Version::new(ver).unwrap()).build().unwrap();
            let ternary = qr.to_ternary();

            assert_eq!(ternary.len(), qr.width() * qr.width());
            assert!(ternary.iter().all(|&m| m == 0 || m == 1));
        }
    }

    #[test]
    fn test_errors() {
        assert_eq!(QRBuilder::new(b"").build(), Err(QRError::EmptyData));
        assert_eq!(
            QRBuilder::new("1234567890".repeat(306).as_bytes())
                .version(Version::new(40).unwrap())
                .ec_level(ECLevel::H)
                .build(),
            Err(QRError::CapacityOverflow)
        );
        assert_eq!(create_symbol(41, ECLevel::L), Err(QRError::UnsupportedVersion(41)));
    }
}
