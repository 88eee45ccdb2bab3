use barab::{checksum, decode, encode, Code39Decoder, Code39Encoder, LinearEncoder, Symbology};
use proptest::prelude::*;

proptest! {
    #[test]
    fn code39_round_trip(data in "[A-Z0-9 $%./+-]{1,20}", pixels in 1usize..6, quiet_zone in 1usize..12) {
        let scanline = encode(Symbology::Code39, &data).unwrap().to_scanline(pixels, quiet_zone);
        prop_assert_eq!(decode(Symbology::Code39, &scanline).unwrap(), data);
    }

    #[test]
    fn code39_round_trip_uppercases(data in "[a-z0-9]{1,20}") {
        let scanline = encode(Symbology::Code39, &data).unwrap().to_scanline(3, 10);
        prop_assert_eq!(decode(Symbology::Code39, &scanline).unwrap(), data.to_ascii_uppercase());
    }

    #[test]
    fn code39_check_character_survives(data in "[A-Z0-9]{1,12}") {
        let encoder = Code39Encoder::new().with_check_character(true);
        let scanline = encoder.encode(&data).unwrap().to_scanline(2, 10);
        let decoded = Code39Decoder::new().decode(&scanline).unwrap();
        prop_assert!(checksum::code39_verify(&decoded).unwrap());
    }

    #[test]
    fn upca_always_95_modules(data in "[0-9]{11}") {
        let modules = encode(Symbology::UpcA, &data).unwrap();
        prop_assert_eq!(modules.len(), 95);
        let codewords = barab::Encoder::new(Symbology::UpcA).codewords(&data).unwrap();
        let code: String = codewords.iter().map(|digit| char::from(b'0' + digit)).collect();
        prop_assert!(checksum::upca_verify(&code).unwrap());
    }

    #[test]
    fn code128_set_b_length(data in "[ -~]{1,30}") {
        let encoder = barab::Code128Encoder::new().with_code_set(barab::CodeSet::B);
        let modules = encoder.encode(&data).unwrap();
        // Start, data, checksum and stop.
        prop_assert_eq!(modules.len(), 11 * (data.len() + 2) + 13);
    }
}
