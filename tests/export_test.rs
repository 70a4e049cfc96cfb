#[cfg(test)]
mod tests {
    use triagem::export::ExportDocument;
    use triagem::{
        ExportFormat, Severity, TriageError, export_results, infer_format,
        load_mapping_from_reader, normalize, parse_reports, run_triage,
    };

    const MAPPING: &str = "\
symptom,synonyms,associated_diseases,severity_level
dor no peito,dor torácica,angina;infarto do miocárdio,alto
falta de ar,dispneia,insuficiência cardíaca,crítico
";

    const CORPUS: &str = "\
Sinto dor no peito, e falta de ar.
Estou com dor de cabeça.
";

    fn run() -> triagem::TriageRun {
        let kb = load_mapping_from_reader(MAPPING.as_bytes()).unwrap();
        run_triage(&parse_reports(CORPUS.as_bytes()), &kb, false)
    }

    #[test]
    fn test_json_round_trip() {
        let run = run();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resultado.json");

        export_results(&path, ExportFormat::Json, &run.outcomes, &run.summary).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let document: ExportDocument = serde_json::from_str(&raw).unwrap();

        assert_eq!(document.reports, run.outcomes);
        assert_eq!(document.summary, run.summary);

        // Spot-check that nothing essential was dropped
        let first = document.reports[0].diagnosis().unwrap();
        assert_eq!(first.report_id, 1);
        assert_eq!(first.max_severity, Some(Severity::Critico));
        assert!(!first.unmapped);
        let second = document.reports[1].diagnosis().unwrap();
        assert!(second.unmapped);
    }

    #[test]
    fn test_csv_round_trip() {
        let run = run();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resultado.csv");

        export_results(&path, ExportFormat::Csv, &run.outcomes, &run.summary).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "report_id");
        assert_eq!(&headers[5], "unmapped");

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);

        for (row, outcome) in rows.iter().zip(&run.outcomes) {
            let result = outcome.diagnosis().unwrap();
            assert_eq!(row[0].parse::<usize>().unwrap(), result.report_id);
            assert_eq!(&row[1], result.report.as_str());

            let symptoms: Vec<&str> = row[2].split("; ").filter(|s| !s.is_empty()).collect();
            assert_eq!(symptoms, result.matched_symptoms);
            let diseases: Vec<&str> = row[3].split("; ").filter(|s| !s.is_empty()).collect();
            assert_eq!(diseases, result.candidate_diseases);

            let severity = match &row[4] {
                "" => None,
                label => Severity::from_normalized(&normalize(label)),
            };
            assert_eq!(severity, result.max_severity);
            assert_eq!(row[5].parse::<bool>().unwrap(), result.unmapped);
        }
    }

    #[test]
    fn test_unsupported_format_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resultado.xml");

        // The caller resolves the format first; "xml" never reaches a writer
        let err = infer_format(&path, None).unwrap_err();
        assert!(matches!(err, TriageError::UnsupportedFormat(name) if name == "xml"));
        assert!(!path.exists());

        let err = "xml".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, TriageError::UnsupportedFormat(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let run = run();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resultado.json");

        export_results(&path, ExportFormat::Json, &run.outcomes, &run.summary).unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["resultado.json"]);
    }

    #[test]
    fn test_export_creates_missing_parent_directory() {
        let run = run();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saida").join("resultado.csv");

        export_results(&path, ExportFormat::Csv, &run.outcomes, &run.summary).unwrap();
        assert!(path.exists());
    }
}
