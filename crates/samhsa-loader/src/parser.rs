//! Code list CSV reader.
//!
//! Provides a streaming reader that pulls a single named column out of a
//! comma-delimited, header-first, Excel-quoted CSV file.

use std::io::Read;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::types::{LoadError, LoadResult};

/// A streaming reader for one column of a code list.
///
/// Records are read one at a time. Rows too short to hold the column are
/// skipped; blank values are dropped and counted unless
/// [`skip_blank_values`](Self::skip_blank_values) is turned off.
pub struct CodeListReader<R: Read> {
    reader: Reader<R>,
    column_index: usize,
    skip_blank_values: bool,
    records_read: usize,
    blank_values: usize,
}

impl<R: Read> CodeListReader<R> {
    /// Creates a reader for `column` of the CSV data in `reader`.
    ///
    /// `resource` names the data in error messages.
    ///
    /// # Errors
    /// Returns [`LoadError::MissingColumn`] if the header row has no column
    /// named exactly `column`, or a CSV error if the header cannot be read.
    pub fn from_reader(reader: R, resource: &str, column: &str) -> LoadResult<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::None)
            .from_reader(reader);

        let column_index = Self::find_column(&mut csv_reader, resource, column)?;

        Ok(Self {
            reader: csv_reader,
            column_index,
            skip_blank_values: true,
            records_read: 0,
            blank_values: 0,
        })
    }

    /// Locates the column in the header row.
    fn find_column(reader: &mut Reader<R>, resource: &str, column: &str) -> LoadResult<usize> {
        let headers = reader.headers()?;

        headers
            .iter()
            // Handle UTF-8 BOM at start of file
            .position(|header| header.trim_start_matches('\u{feff}') == column)
            .ok_or_else(|| LoadError::MissingColumn {
                resource: resource.to_string(),
                column: column.to_string(),
            })
    }

    /// Sets whether blank values are dropped (the default) or returned.
    pub fn skip_blank_values(mut self, skip: bool) -> Self {
        self.skip_blank_values = skip;
        self
    }

    /// Returns the index of the column being read.
    pub fn column_index(&self) -> usize {
        self.column_index
    }

    /// Returns the number of data records read so far.
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Returns the number of blank values dropped so far.
    pub fn blank_values(&self) -> usize {
        self.blank_values
    }

    /// Reads every remaining value into a Vec.
    ///
    /// # Errors
    /// Returns the first CSV error encountered.
    pub fn read_all(&mut self) -> LoadResult<Vec<String>> {
        self.by_ref().collect()
    }
}

impl<R: Read> Iterator for CodeListReader<R> {
    type Item = LoadResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut record = StringRecord::new();
            match self.reader.read_record(&mut record) {
                Ok(true) => {
                    if record.is_empty() {
                        continue;
                    }
                    self.records_read += 1;

                    let Some(value) = record.get(self.column_index) else {
                        continue;
                    };

                    if self.skip_blank_values && value.trim().is_empty() {
                        self.blank_values += 1;
                        continue;
                    }

                    return Some(Ok(value.to_string()));
                }
                Ok(false) => return None, // End of file
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_column(data: &str, column: &str) -> LoadResult<Vec<String>> {
        CodeListReader::from_reader(data.as_bytes(), "test.csv", column)?.read_all()
    }

    #[test]
    fn test_reads_named_column() {
        let data = "MS-DRGs,Description\nMS-DRG 894,Alcohol/drug abuse\nMS-DRG 895,Rehab\n";
        let values = read_column(data, "MS-DRGs").unwrap();
        assert_eq!(values, vec!["MS-DRG 894", "MS-DRG 895"]);
    }

    #[test]
    fn test_column_not_first() {
        let data = "Description,CPT Code\nAlcohol screening,H0005\nGroup therapy,90853\n";
        let values = read_column(data, "CPT Code").unwrap();
        assert_eq!(values, vec!["H0005", "90853"]);
    }

    #[test]
    fn test_excel_quoting() {
        let data = "ICD-9-CM Diagnosis Code,Description\n\"291.0\",\"Alcohol withdrawal, delirium\"\n\"303.\"\"9\",x\n";
        let values = read_column(data, "ICD-9-CM Diagnosis Code").unwrap();
        assert_eq!(values, vec!["291.0", "303.\"9"]);
    }

    #[test]
    fn test_missing_column() {
        let data = "CPT,Description\nH0005,x\n";
        let err = read_column(data, "CPT Code").unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingColumn { ref resource, ref column }
                if resource == "test.csv" && column == "CPT Code"
        ));
    }

    #[test]
    fn test_column_match_is_case_sensitive() {
        let data = "cpt code\nH0005\n";
        assert!(read_column(data, "CPT Code").is_err());
    }

    #[test]
    fn test_empty_input_is_missing_column() {
        assert!(matches!(
            read_column("", "MS-DRGs"),
            Err(LoadError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_bom_on_first_header() {
        let data = "\u{feff}MS-DRGs,Description\nMS-DRG 896,x\n";
        let values = read_column(data, "MS-DRGs").unwrap();
        assert_eq!(values, vec!["MS-DRG 896"]);
    }

    #[test]
    fn test_skips_blank_records_and_values() {
        let data = "CPT Code,Description\nH0005,a\n,\n,orphan description\n90853,b\nshort\n";
        let mut reader = CodeListReader::from_reader(data.as_bytes(), "test.csv", "CPT Code").unwrap();
        let values = reader.read_all().unwrap();

        assert_eq!(values, vec!["H0005", "90853", "short"]);
        assert_eq!(reader.blank_values(), 2);
        assert_eq!(reader.records_read(), 5);
    }

    #[test]
    fn test_blank_single_column_row() {
        let data = "CPT Code\n \nH0005\n";

        let mut reader = CodeListReader::from_reader(data.as_bytes(), "test.csv", "CPT Code").unwrap();
        assert_eq!(reader.read_all().unwrap(), vec!["H0005"]);
        assert_eq!(reader.blank_values(), 1);
        assert_eq!(reader.records_read(), 2);

        let mut reader = CodeListReader::from_reader(data.as_bytes(), "test.csv", "CPT Code")
            .unwrap()
            .skip_blank_values(false);
        assert_eq!(reader.read_all().unwrap(), vec![" ", "H0005"]);
        assert_eq!(reader.blank_values(), 0);
        assert_eq!(reader.records_read(), 2);
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let data = "Description,CPT Code\nonly description\nGroup therapy,90853\n";
        let values = read_column(data, "CPT Code").unwrap();
        assert_eq!(values, vec!["90853"]);
    }

    #[test]
    fn test_keep_blank_values() {
        let data = "CPT Code,Description\n ,a\nH0005,b\n";
        let values = CodeListReader::from_reader(data.as_bytes(), "test.csv", "CPT Code")
            .unwrap()
            .skip_blank_values(false)
            .read_all()
            .unwrap();
        assert_eq!(values, vec![" ", "H0005"]);
    }
}
