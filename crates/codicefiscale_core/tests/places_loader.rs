use codicefiscale_core::{
    load_countries_csv, load_countries_zip, load_municipalities_json, Decoder, FixedClock,
    PlaceTables, TableError,
};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

const HEADER: &str = "Stato;Cont;Den Cont;Area;Den Area;ISTAT;Den IT;Den EN;MIN;AT;M49;ISO2;ISO3;Padre ISTAT;Padre ISO3";

fn countries_csv_latin1() -> Vec<u8> {
    let text = [
        HEADER,
        "S;1;Europa;11;Unione europea;100;Italia;Italy;100;n.d.;380;IT;ITA;;",
        "S;1;Europa;13;Altri paesi europei;246;Città del Vaticano;Holy See;246;Z106;336;VA;VAT;;",
        "S;1;Europa;11;Unione europea;206;Belgio;Belgium;206;Z103;056;BE;BEL;;",
        "riga;troppo;corta",
    ]
    .join("\r\n");
    // Every character above is in Latin-1, so one byte per char.
    text.chars().map(|c| c as u32 as u8).collect()
}

fn municipalities_json() -> Vec<u8> {
    serde_json::json!([
        {
            "nome": "Roma",
            "codice": "058091",
            "zona": {"codice": "3", "nome": "Centro"},
            "regione": {"codice": "12", "nome": "Lazio"},
            "provincia": {"codice": "058", "nome": "Roma"},
            "sigla": "RM",
            "codiceCatastale": "H501",
            "cap": ["00118"],
            "popolazione": 2617175
        }
    ])
    .to_string()
    .into_bytes()
}

fn zip_with(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

#[test]
fn csv_loader_decodes_latin1_and_skips_short_rows() {
    let countries = load_countries_csv(&countries_csv_latin1()).unwrap();

    assert_eq!(countries.len(), 3);
    assert_eq!(countries[1].name_it, "Città del Vaticano");
    assert_eq!(countries[1].at_code, "Z106");
    assert_eq!(countries[2].unsd_m49_code, "056");
}

#[test]
fn json_loader_reads_municipalities() {
    let municipalities = load_municipalities_json(&municipalities_json()).unwrap();
    assert_eq!(municipalities.len(), 1);
    assert_eq!(municipalities[0].name, "Roma");
    assert_eq!(municipalities[0].population, 2_617_175);
}

#[test]
fn json_loader_rejects_malformed_input() {
    let err = load_municipalities_json(b"{not json").unwrap_err();
    assert!(matches!(err, TableError::Json(_)));
}

#[test]
fn zip_loader_uses_first_csv_with_records() {
    let csv = countries_csv_latin1();
    let header_only = HEADER.as_bytes().to_vec();
    let archive = zip_with(&[
        ("LEGGIMI.txt", b"note".as_slice()),
        ("vuoto.CSV", header_only.as_slice()),
        ("Elenco-codici.csv", csv.as_slice()),
    ]);

    let countries = load_countries_zip(&archive).unwrap();
    assert_eq!(countries.len(), 3);
    assert_eq!(countries[2].name_it, "Belgio");
}

#[test]
fn zip_without_csv_is_rejected() {
    let archive = zip_with(&[("LEGGIMI.txt", b"note".as_slice())]);
    let err = load_countries_zip(&archive).unwrap_err();
    assert!(matches!(err, TableError::MissingCountryCsv));
}

#[test]
fn corrupt_archive_is_a_zip_error() {
    let err = load_countries_zip(b"PK-not-really").unwrap_err();
    assert!(matches!(err, TableError::Zip(_)));
}

#[test]
fn injected_tables_drive_the_decoder() {
    let municipalities = load_municipalities_json(&municipalities_json()).unwrap();
    let countries = load_countries_csv(&countries_csv_latin1()).unwrap();
    let tables = PlaceTables::new(municipalities, countries).unwrap();
    let decoder = Decoder::new(&tables).with_clock(FixedClock(2025));

    let rome = decoder.decode("RSSMRA77L18H501W").unwrap();
    assert_eq!(rome.birth_place_name, "Roma");

    let belgium = decoder.decode("RSSMRA77L18Z103I").unwrap();
    assert_eq!(belgium.birth_place_name, "Belgio");

    // Brazil is not part of these tables.
    assert!(decoder.decode("RSSLVR64M44Z602P").is_err());
}
