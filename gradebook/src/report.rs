use std::str::FromStr;

use anyhow::{bail, Context, Result};
use classroom::student::Student;
use classroom::types::StudentName;
use itertools::Itertools;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::roster::Gradebook;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Csv,
}

impl FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            other => bail!("unknown output format `{other}`, expected `text` or `csv`"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeRow {
    student: StudentName,
    // one entry per classroom, `None` where the student is not enrolled
    class_rooms: Vec<Option<Decimal>>,
    semester: Decimal,
}

impl GradeRow {
    pub fn student(&self) -> &StudentName {
        &self.student
    }

    pub fn class_rooms(&self) -> &[Option<Decimal>] {
        &self.class_rooms
    }

    pub fn semester(&self) -> Decimal {
        self.semester
    }
}

/// Every student's grade in each classroom and over the whole semester.
#[derive(Debug, Clone)]
pub struct GradeReport {
    class_rooms: Vec<String>,
    rows: Vec<GradeRow>,
}

impl GradeReport {
    pub fn new(gradebook: &Gradebook) -> Result<Self> {
        let teacher = gradebook.teacher();
        let mut rows = Vec::new();

        for (name, semester) in teacher.semester_report()? {
            let student = Student::from(name.clone());
            let mut class_rooms = Vec::with_capacity(teacher.len());
            for class_room in teacher.class_rooms() {
                let grade = if class_room.is_enrolled(&student) {
                    Some(class_room.tally_for(&student)?.grade())
                } else {
                    None
                };
                class_rooms.push(grade);
            }

            rows.push(GradeRow {
                student: name,
                class_rooms,
                semester,
            });
        }

        Ok(Self {
            class_rooms: gradebook.class_room_names().to_vec(),
            rows,
        })
    }

    pub fn rows(&self) -> &[GradeRow] {
        &self.rows
    }

    pub fn render(&self, format: Format, precision: usize) -> Result<String> {
        match format {
            Format::Text => Ok(self.text(precision)),
            Format::Csv => self.csv(precision),
        }
    }

    fn header(&self) -> Vec<String> {
        let mut header = vec!["student".to_owned()];
        header.extend(self.class_rooms.iter().cloned());
        header.push("semester".to_owned());
        header
    }

    fn cells(&self, precision: usize) -> impl Iterator<Item = Vec<String>> + '_ {
        let cell = move |grade: Decimal| format_grade(grade, precision);
        self.rows.iter().map(move |row| {
            let mut cells = vec![row.student.to_string()];
            cells.extend(
                row.class_rooms
                    .iter()
                    .map(|class_room| class_room.map_or_else(|| "-".to_owned(), cell)),
            );
            cells.push(cell(row.semester));
            cells
        })
    }

    /// Columns padded to line up, one student per line.
    pub fn text(&self, precision: usize) -> String {
        let lines = std::iter::once(self.header())
            .chain(self.cells(precision))
            .collect_vec();

        let widths = (0..self.class_rooms.len() + 2)
            .map(|column| {
                lines
                    .iter()
                    .map(|line| line[column].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect_vec();

        lines
            .iter()
            .map(|line| {
                let padded = line
                    .iter()
                    .zip(&widths)
                    .map(|(cell, &width)| format!("{cell:<width$}"))
                    .join("  ");
                format!("{}\n", padded.trim_end())
            })
            .collect()
    }

    pub fn csv(&self, precision: usize) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(self.header())?;
        for cells in self.cells(precision) {
            writer.write_record(cells)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|err| err.into_error())
            .context("could not finish writing CSV")?;
        String::from_utf8(bytes).context("CSV output is not UTF-8")
    }
}

/// Rounds half away from zero, then pads with zeros to exactly `precision` places.
fn format_grade(grade: Decimal, precision: usize) -> String {
    let places = u32::try_from(precision).unwrap_or(u32::MAX);
    let rounded = grade.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.precision$}")
}
