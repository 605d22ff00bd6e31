// ABOUTME: Case-insensitive spreadsheet column lookup turning header+cell exports into raw rows
// ABOUTME: Reserved columns fill the fixed schema; every other column becomes a custom question
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sheet header mapping
//!
//! Headers are normalised once per import with [`normalize_key`], so `Body Fat %`,
//! `body_fat` and `BodyFat` all address the same column. A header that is not in
//! the reserved list is a custom question; `category: question` assigns a
//! category, otherwise the question lands in `general`.

use coachdesk_core::constants::{columns, custom_questions, measurements};
use coachdesk_core::errors::PipelineError;
use coachdesk_core::models::{
    normalize_key, CustomQuestion, RawNutrition, RawRecovery, RawRow, RawTraining,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A sheet export: one header row plus string cells
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetTable {
    /// Header row as displayed
    pub headers: Vec<String>,
    /// Data rows; short rows are padded with empty cells
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Date,
    Week,
    Weight,
    BodyFat,
    Calories,
    Protein,
    Carbs,
    Fats,
    Sessions,
    Intensity,
    Progress,
    Sleep,
    Stress,
    Energy,
    PercentageRating,
}

impl Field {
    const ALL: [Self; 15] = [
        Self::Date,
        Self::Week,
        Self::Weight,
        Self::BodyFat,
        Self::Calories,
        Self::Protein,
        Self::Carbs,
        Self::Fats,
        Self::Sessions,
        Self::Intensity,
        Self::Progress,
        Self::Sleep,
        Self::Stress,
        Self::Energy,
        Self::PercentageRating,
    ];

    /// Normalised header keys naming this field, in lookup order
    const fn keys(self) -> &'static [&'static str] {
        match self {
            Self::Date => &[columns::DATE],
            Self::Week => &[columns::WEEK],
            Self::Weight => &[columns::WEIGHT],
            Self::BodyFat => &[columns::BODY_FAT],
            Self::Calories => &[columns::CALORIES],
            Self::Protein => &[columns::PROTEIN],
            Self::Carbs => &[columns::CARBS],
            Self::Fats => &[columns::FATS],
            Self::Sessions => &[columns::SESSIONS],
            Self::Intensity => &[columns::INTENSITY],
            Self::Progress => &[columns::PROGRESS],
            Self::Sleep => &[columns::SLEEP],
            Self::Stress => &[columns::STRESS],
            Self::Energy => &[columns::ENERGY],
            Self::PercentageRating => &[columns::PERCENTAGE_RATING, columns::RATING],
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.keys().contains(&key))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Column {
    Field(Field),
    Measurement(&'static str),
    Question { category: String, question: String },
    Ignored,
}

impl Column {
    fn classify(header: &str) -> Self {
        let key = normalize_key(header);
        if key.is_empty() {
            return Self::Ignored;
        }

        if columns::RESERVED.contains(&key.as_str()) {
            if let Some(field) = Field::from_key(&key) {
                return Self::Field(field);
            }
            if let Some(name) = measurements::CIRCUMFERENCES
                .into_iter()
                .find(|name| normalize_key(name) == key)
            {
                return Self::Measurement(name);
            }
        }

        let (category, question) = match header.split_once(custom_questions::CATEGORY_SEPARATOR) {
            Some((category, question)) if !category.trim().is_empty() && !question.trim().is_empty() => {
                (category.trim().to_lowercase(), question.trim())
            }
            _ => (custom_questions::DEFAULT_CATEGORY.to_owned(), header.trim()),
        };

        Self::Question {
            category,
            question: question.to_owned(),
        }
    }
}

/// Column lookup table built from a header row
#[derive(Debug, Clone)]
pub struct HeaderMap {
    headers: Vec<String>,
    columns: Vec<Column>,
    index: HashMap<String, usize>,
    fields: Vec<(Field, usize)>,
    measurements: Vec<(&'static str, usize)>,
}

impl HeaderMap {
    /// Build the lookup table; the first of duplicate headers wins lookups
    #[must_use]
    pub fn new(headers: &[String]) -> Self {
        let mut index = HashMap::with_capacity(headers.len());
        for (position, header) in headers.iter().enumerate() {
            let key = normalize_key(header);
            if !key.is_empty() {
                index.entry(key).or_insert(position);
            }
        }

        let mut map = Self {
            headers: headers.to_vec(),
            columns: headers.iter().map(|h| Column::classify(h)).collect(),
            index,
            fields: Vec::new(),
            measurements: Vec::new(),
        };
        map.fields = Field::ALL
            .into_iter()
            .filter_map(|field| {
                field
                    .keys()
                    .iter()
                    .find_map(|key| map.position(key))
                    .map(|position| (field, position))
            })
            .collect();
        map.measurements = measurements::CIRCUMFERENCES
            .into_iter()
            .filter_map(|name| map.position(name).map(|position| (name, position)))
            .collect();
        map
    }

    /// Position of a column, matched case-insensitively and ignoring separators
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(&normalize_key(name)).copied()
    }

    /// Whether a header names a fixed-schema column
    #[must_use]
    pub fn is_reserved(header: &str) -> bool {
        matches!(
            Column::classify(header),
            Column::Field(_) | Column::Measurement(_)
        )
    }

    /// Headers that will be read as custom questions
    pub fn custom_question_headers(&self) -> impl Iterator<Item = &str> {
        self.headers
            .iter()
            .zip(&self.columns)
            .filter(|(_, column)| matches!(column, Column::Question { .. }))
            .map(|(header, _)| header.as_str())
    }

    /// Convert data rows, skipping rows whose cells are all empty
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::MalformedRow`] when a numeric cell cannot be parsed
    pub fn rows_from(&self, rows: &[Vec<String>]) -> Result<Vec<RawRow>, PipelineError> {
        rows.iter()
            .enumerate()
            .filter(|(_, cells)| cells.iter().any(|c| !c.trim().is_empty()))
            .map(|(index, cells)| self.row_from(index, cells))
            .collect()
    }

    fn has_any(&self, fields: &[Field]) -> bool {
        self.fields.iter().any(|(field, _)| fields.contains(field))
    }

    fn row_from(&self, index: usize, cells: &[String]) -> Result<RawRow, PipelineError> {
        let cell_at = |position: usize| {
            cells
                .get(position)
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
        };

        let mut row = RawRow::default();
        if self.has_any(&[Field::Calories, Field::Protein, Field::Carbs, Field::Fats]) {
            row.nutrition = Some(RawNutrition::default());
        }
        if self.has_any(&[Field::Sessions, Field::Intensity, Field::Progress]) {
            row.training = Some(RawTraining::default());
        }
        if self.has_any(&[Field::Sleep, Field::Stress, Field::Energy]) {
            row.recovery = Some(RawRecovery::default());
        }

        for &(field, position) in &self.fields {
            if let Some(cell) = cell_at(position) {
                apply_field(&mut row, field, index, &self.headers[position], cell)?;
            }
        }

        for &(name, position) in &self.measurements {
            if let Some(cell) = cell_at(position) {
                row.measurements.insert(
                    name.to_owned(),
                    parse_number(index, &self.headers[position], cell)?,
                );
            }
        }

        for (position, column) in self.columns.iter().enumerate() {
            if let Column::Question { category, question } = column {
                if let Some(cell) = cell_at(position) {
                    row.custom_questions
                        .push(CustomQuestion::new(question.clone(), cell, category.clone()));
                }
            }
        }

        Ok(row)
    }
}

fn apply_field(
    row: &mut RawRow,
    field: Field,
    index: usize,
    header: &str,
    cell: &str,
) -> Result<(), PipelineError> {
    let number = || parse_number(index, header, cell).map(Some);

    match field {
        Field::Date => row.date = Some(cell.to_owned()),
        Field::Week => {
            row.week = Some(cell.parse().map_err(|_| {
                PipelineError::invalid_field(index, header, "expected a whole week number in")
            })?);
        }
        Field::Weight => row.weight = number()?,
        Field::BodyFat => row.body_fat = number()?,
        Field::PercentageRating => row.percentage_rating = number()?,
        Field::Calories => nutrition(row).calories = number()?,
        Field::Protein => nutrition(row).protein = number()?,
        Field::Carbs => nutrition(row).carbs = number()?,
        Field::Fats => nutrition(row).fats = number()?,
        Field::Sessions => training(row).sessions = number()?,
        Field::Intensity => training(row).intensity = number()?,
        Field::Progress => training(row).progress = Some(cell.to_owned()),
        Field::Sleep => recovery(row).sleep = number()?,
        Field::Stress => recovery(row).stress = number()?,
        Field::Energy => recovery(row).energy = number()?,
    }
    Ok(())
}

fn nutrition(row: &mut RawRow) -> &mut RawNutrition {
    row.nutrition.get_or_insert_with(RawNutrition::default)
}

fn training(row: &mut RawRow) -> &mut RawTraining {
    row.training.get_or_insert_with(RawTraining::default)
}

fn recovery(row: &mut RawRow) -> &mut RawRecovery {
    row.recovery.get_or_insert_with(RawRecovery::default)
}

/// Parse a numeric cell, tolerating a trailing `%` and thousands separators
fn parse_number(index: usize, header: &str, cell: &str) -> Result<f64, PipelineError> {
    let cleaned: String = cell
        .trim_end_matches('%')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PipelineError::invalid_field(index, header, "expected a number in"))
}
