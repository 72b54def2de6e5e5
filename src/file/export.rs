// src/file/export.rs
use std::path::Path;
use csv::Writer;
use tracing::info;
use super::StoreError;
use crate::config::QuadrantId;
use crate::state::Analysis;

const HEADER: [&str; 10] = [
    "id",
    "createdAt",
    "challenge",
    "upperLeft",
    "upperRight",
    "lowerLeft",
    "lowerRight",
    "insights",
    "actionPlan",
    "completed",
];

/// Writes one CSV row per analysis, in history order.
pub fn export_csv<P: AsRef<Path>>(analyses: &[Analysis], path: P) -> Result<(), StoreError> {
    let mut writer = Writer::from_path(path.as_ref())?;
    write_rows(&mut writer, analyses)?;
    writer.flush()?;

    info!(path = %path.as_ref().display(), count = analyses.len(), "Exported analyses");
    Ok(())
}

fn write_rows<W: std::io::Write>(writer: &mut Writer<W>, analyses: &[Analysis]) -> Result<(), StoreError> {
    writer.write_record(HEADER)?;

    for analysis in analyses {
        let created_at = analysis.created_at.to_rfc3339();
        let completed = analysis.completed.to_string();

        let mut record = vec![
            analysis.id.as_str(),
            created_at.as_str(),
            analysis.challenge.as_str(),
        ];
        record.extend(QuadrantId::ALL.iter().map(|id| analysis.quadrants.get(*id)));
        record.push(analysis.insights.as_str());
        record.push(analysis.action_plan.as_str());
        record.push(completed.as_str());

        writer.write_record(&record)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use crate::state::{AnalysisDraft, DraftField};

    #[test]
    fn writes_header_and_one_row_per_analysis() {
        let mut draft = AnalysisDraft::default();
        draft.update_field(DraftField::Challenge, "Switch careers, maybe");
        draft.update_field(DraftField::Quadrant(QuadrantId::LowerRight), "market is tight");
        draft.update_field(DraftField::Insights, "need more savings");
        draft.update_field(DraftField::ActionPlan, "update resume today");
        let analyses = vec![draft.clone().into_analysis(Utc::now()), draft.into_analysis(Utc::now())];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        export_csv(&analyses, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, HEADER.map(String::from).to_vec());

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], analyses[0].id.as_str());
        assert_eq!(&rows[0][2], "Switch careers, maybe");
        assert_eq!(&rows[0][6], "market is tight");
        assert_eq!(&rows[1][9], "true");
    }

    #[test]
    fn empty_history_writes_only_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        export_csv(&[], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("history.csv");
        assert!(export_csv(&[], &path).is_err());
    }
}
