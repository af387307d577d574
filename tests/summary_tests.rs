use notafiscal::*;
use rust_decimal_macros::dec;

fn invoice(tp_nf: &str, v_prod: &str, v_icms: &str) -> FiscalRecord {
    let xml = format!(
        "<NFe><infNFe><ide><tpNF>{tp_nf}</tpNF><nNF>1</nNF></ide>\
         <total><ICMSTot><vBC>100</vBC><vICMS>{v_icms}</vICMS><vProd>{v_prod}</vProd>\
         <vPIS>2.00</vPIS><vCOFINS>4.00</vCOFINS><vIPI>1.00</vIPI>\
         <vICMSUFDest>0.50</vICMSUFDest></ICMSTot></total></infNFe></NFe>"
    );
    extract_document(&xml, "nfe.xml").unwrap()
}

fn manifest(tp_cte: &str, v_tprest: &str) -> FiscalRecord {
    let xml = format!(
        "<CTe><infCte><ide><tpCTe>{tp_cte}</tpCTe><nCT>2</nCT></ide>\
         <vPrest><vTPrest>{v_tprest}</vTPrest></vPrest>\
         <imp><ICMS><ICMS00><vBC>50</vBC><pICMS>12</pICMS><vICMS>6.00</vICMS></ICMS00></ICMS>\
         <vPIS>1.00</vPIS></imp></infCte></CTe>"
    );
    extract_document(&xml, "cte.xml").unwrap()
}

#[test]
fn empty_collection_yields_all_zeros() {
    let summary = Summary::of(&[]);
    assert_eq!(summary.documents, 0);
    assert_eq!(summary.inbound, TaxTotals::default());
    assert_eq!(summary.outbound, TaxTotals::default());
    assert_eq!(summary.overall, TaxTotals::default());

    let none: Vec<FiscalRecord> = Vec::new();
    assert_eq!(TaxTotals::sum(&none), TaxTotals::default());
}

#[test]
fn sums_partition_by_direction_and_kind() {
    let records = vec![
        invoice("0", "100.00", "18.00"), // inbound
        invoice("1", "200.00", "36.00"), // outbound
        manifest("1", "50.00"),          // inbound
    ];
    let summary = Summary::of(&records);

    assert_eq!(summary.documents, 3);
    assert_eq!(summary.invoices, 2);
    assert_eq!(summary.manifests, 1);

    assert_eq!(summary.inbound.count, 2);
    assert_eq!(summary.inbound.total_value, dec!(150.00));
    assert_eq!(summary.inbound.icms, dec!(24.00)); // 18 + 6
    assert_eq!(summary.inbound.pis, dec!(3.00));
    assert_eq!(summary.inbound.ipi, dec!(1.00)); // manifests contribute 0

    assert_eq!(summary.outbound.count, 1);
    assert_eq!(summary.outbound.total_value, dec!(200.00));
    assert_eq!(summary.outbound.difal, dec!(0.50));

    // Grand totals are the sum of both partitions
    assert_eq!(summary.overall.count, 3);
    assert_eq!(summary.overall.total_value, dec!(350.00));
    assert_eq!(summary.overall.icms, dec!(60.00));
}

#[test]
fn sums_are_independent_of_record_order() {
    let a = invoice("0", "100.00", "18.00");
    let b = manifest("1", "50.00");
    let c = invoice("1", "75.50", "9.00");
    let forward = TaxTotals::sum([a.clone(), b.clone(), c.clone()].iter());
    let reverse = TaxTotals::sum([c, b, a].iter());
    assert_eq!(forward, reverse);
}

#[test]
fn rows_follow_the_report_layout() {
    let records = vec![invoice("0", "100.00", "18.00"), manifest("0", "50.00")];
    let rows = Summary::of(&records).rows();

    assert_eq!(rows[0], ("Total de Documentos".to_string(), Some(dec!(2))));
    assert_eq!(rows[1], ("Total NF-e".to_string(), Some(dec!(1))));
    assert_eq!(rows[2], ("Total CT-e".to_string(), Some(dec!(1))));

    // Separator then section header carry no value
    assert_eq!(rows[3], (String::new(), None));
    assert_eq!(rows[4], ("--- ENTRADAS ---".to_string(), None));
    assert_eq!(rows[5], ("Qtd. Entradas".to_string(), Some(dec!(1))));

    let labels: Vec<&str> = rows.iter().map(|(l, _)| l.as_str()).collect();
    assert!(labels.contains(&"--- SAÍDAS ---"));
    assert!(labels.contains(&"--- GERAL ---"));
    assert!(labels.contains(&"DIFAL Geral"));

    // Values are raw numbers; formatting is the export layer's job
    let (label, value) = rows
        .iter()
        .find(|(l, _)| l == "Valor Total Geral")
        .expect("grand total row");
    assert_eq!(label, "Valor Total Geral");
    assert_eq!(*value, Some(dec!(150.00)));
}

#[test]
fn export_formatting_helpers_render_pt_br() {
    assert_eq!(format_brl(dec!(1234.5)), "R$ 1.234,50");
    assert_eq!(format_percent(dec!(7.6)), "7.60%");
}

#[test]
fn records_serialize_for_the_export_layer() {
    let record = invoice("1", "200.00", "36.00");
    let json = serde_json::to_string(&record).unwrap();
    let back: FiscalRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record, back);
}
