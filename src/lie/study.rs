//! # Study of a Lie algebra
//!
//! For a (possibly parametric) nilpotent Lie algebra G the study computes:
//! - the candidate Nikolayevsky derivation N and the conditions under which it is a derivation;
//! - the generic element of the larger bound for the derivations and the conditions under which
//!   it is a derivation;
//! - unless N is zero, the centralizer of N inside the affine space of Nikolayevsky-like
//!   derivations, its dimension and its generic element.
//!
//! [`study_catalog`] runs the study over entries of a catalog, in catalog order, and collects a
//! summary table. The run is configured by a task document (see [`StudyConfig`]).
//!
//! # Example
//! ```rust, ignore
//! use RustedLieThe::lie::lie_algebra::LieAlgebra;
//! use RustedLieThe::lie::study::{ReportStyle, study_group};
//! let g = LieAlgebra::from_structure_constants("0,0,12").unwrap();
//! let report = study_group(&g, ReportStyle::Plain).unwrap();
//! println!("{}", report);
//! ```
use crate::Utils::task_parser::{DocumentMap, SectionMap, parse_document_as};
use crate::lie::centralizer::centralizer;
use crate::lie::classification::Catalog;
use crate::lie::derivations::{derivation_when, derivations_parametric};
use crate::lie::error::{LieError, LieResult};
use crate::lie::gl::GL;
use crate::lie::lie_algebra::LieAlgebra;
use crate::lie::nikolayevsky::{
    Nikolayevsky, latex_set, nikolayevsky_like_derivations_between, plain_set,
};
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_vectors::ExprMatrix;
use log::{LevelFilter, info, warn};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{Duration, Instant};
use strum_macros::{Display, EnumIter, EnumString};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ReportStyle {
    Plain,
    Latex,
}

/// The centralizer of a non-zero Nikolayevsky derivation
#[derive(Debug, Clone, PartialEq)]
pub struct CentralizerReport {
    pub dimension: usize,
    /// `None` when the centralizer is zero
    pub generic_element: Option<ExprMatrix>,
    pub derivation_conditions: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudyReport {
    pub algebra: LieAlgebra,
    pub style: ReportStyle,
    pub nikolayevsky: Nikolayevsky,
    pub generic_derivation: ExprMatrix,
    pub generic_derivation_conditions: Vec<Expr>,
    /// `None` when the Nikolayevsky derivation is zero
    pub centralizer: Option<CentralizerReport>,
}

pub fn study_group(G: &LieAlgebra, style: ReportStyle) -> LieResult<StudyReport> {
    let gl = GL::new(G.dimension());
    let bounds = derivations_parametric(G, &gl)?;
    let nikolayevsky_like = nikolayevsky_like_derivations_between(&bounds, &gl)?;
    let nikolayevsky = Nikolayevsky::new(G, &gl, &nikolayevsky_like.N);

    let generic = bounds.larger().generic_element();
    let generic_derivation = gl.gl_to_matrix(&generic);
    let generic_derivation_conditions = derivation_when(G, &gl, &generic);

    let centralizer_report = if nikolayevsky.is_zero() {
        info!("{}: Nikolayevsky derivation is zero", G);
        None
    } else {
        let C = centralizer(&nikolayevsky_like.N, &nikolayevsky_like.W, &gl)?;
        let dimension = C.dimension();
        let (generic_element, derivation_conditions) = if dimension > 0 {
            let element = C.generic_element();
            (
                Some(gl.gl_to_matrix(&element)),
                derivation_when(G, &gl, &element),
            )
        } else {
            (None, Vec::new())
        };
        Some(CentralizerReport {
            dimension,
            generic_element,
            derivation_conditions,
        })
    };

    Ok(StudyReport {
        algebra: G.clone(),
        style,
        nikolayevsky,
        generic_derivation,
        generic_derivation_conditions,
        centralizer: centralizer_report,
    })
}

impl StudyReport {
    /// short classification of the outcome for the summary table
    pub fn outcome(&self) -> String {
        if self.nikolayevsky.is_zero() {
            "zero".to_string()
        } else {
            self.nikolayevsky.kind().to_string()
        }
    }

    fn render_set(&self, expressions: &[Expr]) -> String {
        match self.style {
            ReportStyle::Plain => plain_set(expressions),
            ReportStyle::Latex => latex_set(expressions),
        }
    }

    fn render_matrix(&self, matrix: &ExprMatrix) -> String {
        match self.style {
            ReportStyle::Plain => matrix.to_string(),
            ReportStyle::Latex => matrix.to_latex(),
        }
    }
}

impl fmt::Display for StudyReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (algebra, nikolayevsky) = match self.style {
            ReportStyle::Plain => (self.algebra.to_string(), self.nikolayevsky.to_string()),
            ReportStyle::Latex => (self.algebra.to_latex(), self.nikolayevsky.to_latex()),
        };
        writeln!(f, "Lie algebra: {}", algebra)?;
        writeln!(f, "Nikolayevsky derivation: {}", nikolayevsky)?;
        writeln!(
            f,
            "generic derivation {}",
            self.render_matrix(&self.generic_derivation)
        )?;
        write!(
            f,
            "derivation when the following are zero: {}",
            self.render_set(&self.generic_derivation_conditions)
        )?;
        let Some(centralizer) = &self.centralizer else {
            return write!(f, "\nNikolayevsky derivation is zero");
        };
        write!(
            f,
            "\ncentralizer contained in space of dimension {}",
            centralizer.dimension
        )?;
        if let Some(element) = &centralizer.generic_element {
            write!(f, "\ngeneric element {}", self.render_matrix(element))?;
            if !centralizer.derivation_conditions.is_empty() {
                write!(
                    f,
                    "\nderivation when the following are zero: {}",
                    self.render_set(&centralizer.derivation_conditions)
                )?;
            }
        }
        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////////////
//                    RUNS OVER A CATALOG
/////////////////////////////////////////////////////////////////////////////////////

/// Settings of a study run, read from a task document:
/// ```text
/// study
/// catalog: NonNiceNilpotent7
/// entries: 1, 2, 5
/// style: plain
/// logging
/// loglevel: info
/// log_file: true
/// output
/// report_file: report.txt
/// ```
/// Every key is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyConfig {
    pub catalog: Catalog,
    /// 1-based positions in the catalog; all entries if `None`
    pub entries: Option<Vec<usize>>,
    pub style: ReportStyle,
    pub log_level: LevelFilter,
    pub log_file: bool,
    pub report_file: Option<PathBuf>,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            catalog: Catalog::NonNiceNilpotent7,
            entries: None,
            style: ReportStyle::Plain,
            log_level: LevelFilter::Info,
            log_file: false,
            report_file: None,
        }
    }
}

fn section(title: &str, keys: &[&str]) -> (String, SectionMap) {
    let section = keys.iter().map(|k| (k.to_string(), None)).collect();
    (title.to_string(), section)
}

/// the single string value of `key`, if present
fn single_string(map: &DocumentMap, title: &str, key: &str) -> LieResult<Option<String>> {
    match map.get(title).and_then(|s| s.get(key)).cloned().flatten() {
        None => Ok(None),
        Some(values) => match values.as_slice() {
            [value] => Ok(Some(value.to_string())),
            _ => Err(LieError::Config(format!(
                "{}: expected a single value for '{}'",
                title, key
            ))),
        },
    }
}

impl StudyConfig {
    pub fn from_task_document(input: &str) -> LieResult<Self> {
        let template: DocumentMap = [
            section("study", &["catalog", "entries", "style"]),
            section("logging", &["loglevel", "log_file"]),
            section("output", &["report_file"]),
        ]
        .into_iter()
        .collect();
        let map = parse_document_as(input, Some(&template)).map_err(LieError::Config)?;
        let mut config = StudyConfig::default();

        if let Some(catalog) = single_string(&map, "study", "catalog")? {
            config.catalog = Catalog::from_str(&catalog)
                .map_err(|_| LieError::Config(format!("unknown catalog '{}'", catalog)))?;
        }
        if let Some(values) = map["study"]["entries"].as_ref() {
            let entries = values
                .iter()
                .map(|v| match v.as_integer() {
                    Some(i) if i > 0 => Ok(i as usize),
                    _ => Err(LieError::Config(format!(
                        "entries must be positive integers, found '{}'",
                        v
                    ))),
                })
                .collect::<LieResult<Vec<usize>>>()?;
            config.entries = Some(entries);
        }
        if let Some(style) = single_string(&map, "study", "style")? {
            config.style = ReportStyle::from_str(&style)
                .map_err(|_| LieError::Config(format!("unknown report style '{}'", style)))?;
        }
        if let Some(level) = single_string(&map, "logging", "loglevel")? {
            config.log_level = LevelFilter::from_str(&level)
                .map_err(|_| LieError::Config(format!("unknown log level '{}'", level)))?;
        }
        if let Some(values) = map["logging"]["log_file"].as_ref() {
            config.log_file = match values.as_slice() {
                [value] => value.as_boolean(),
                _ => None,
            }
            .ok_or_else(|| LieError::Config("log_file must be true or false".to_string()))?;
        }
        if let Some(path) = single_string(&map, "output", "report_file")? {
            config.report_file = Some(PathBuf::from(path));
        }
        Ok(config)
    }
}

/// One catalog entry: its position, name, structure constants and the outcome of the study
#[derive(Debug)]
pub struct CatalogRun {
    pub index: usize,
    pub name: String,
    pub structure_constants: String,
    pub outcome: LieResult<StudyReport>,
    pub elapsed: Duration,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "#")]
    index: usize,
    name: String,
    #[tabled(rename = "structure constants")]
    structure_constants: String,
    #[tabled(rename = "Nikolayevsky")]
    nikolayevsky: String,
    #[tabled(rename = "centralizer dim")]
    centralizer: String,
    #[tabled(rename = "time, ms")]
    elapsed_ms: u128,
}

#[derive(Debug)]
pub struct CatalogStudy {
    pub catalog: Catalog,
    pub runs: Vec<CatalogRun>,
}

/// Studies the configured entries of the catalog in catalog order. A failing entry is logged
/// and recorded; the run goes on with the next one.
pub fn study_catalog(config: &StudyConfig) -> LieResult<CatalogStudy> {
    let classification = config.catalog.classification();
    let mut indices: Vec<usize> = match &config.entries {
        Some(entries) => entries.clone(),
        None => (1..=classification.len()).collect(),
    };
    indices.sort_unstable();
    indices.dedup();
    // validate before any work is done
    for &index in &indices {
        classification.entry(index)?;
    }
    info!(
        "studying {} entries of the catalog {}",
        indices.len(),
        config.catalog
    );

    let mut runs = Vec::with_capacity(indices.len());
    for index in indices {
        let entry = classification.entry(index)?;
        let begin = Instant::now();
        let outcome = entry
            .lie_algebra()
            .and_then(|G| study_group(&G, config.style));
        let elapsed = begin.elapsed();
        match &outcome {
            Ok(_) => info!("{} done in {} ms", entry.name, elapsed.as_millis()),
            Err(e) => warn!("{} failed: {}", entry.name, e),
        }
        runs.push(CatalogRun {
            index,
            name: entry.name.clone(),
            structure_constants: entry.structure_constants.to_string(),
            outcome,
            elapsed,
        });
    }
    Ok(CatalogStudy {
        catalog: config.catalog,
        runs,
    })
}

impl CatalogStudy {
    pub fn summary_table(&self) -> Table {
        let rows: Vec<SummaryRow> = self
            .runs
            .iter()
            .map(|run| {
                let (nikolayevsky, centralizer) = match &run.outcome {
                    Ok(report) => (
                        report.outcome(),
                        report
                            .centralizer
                            .as_ref()
                            .map_or("-".to_string(), |c| c.dimension.to_string()),
                    ),
                    Err(e) => (format!("error: {}", e), "-".to_string()),
                };
                SummaryRow {
                    index: run.index,
                    name: run.name.clone(),
                    structure_constants: run.structure_constants.clone(),
                    nikolayevsky,
                    centralizer,
                    elapsed_ms: run.elapsed.as_millis(),
                }
            })
            .collect();
        let mut table = Table::new(&rows);
        table.with(Style::modern_rounded());
        table
    }

    /// full reports of all runs, in catalog order
    pub fn report(&self) -> String {
        self.runs
            .iter()
            .map(|run| {
                let body = match &run.outcome {
                    Ok(report) => report.to_string(),
                    Err(e) => format!("error: {}", e),
                };
                format!("{} {}: {}\n{}", self.catalog, run.index, run.name, body)
            })
            .collect::<Vec<String>>()
            .join("\n\n")
    }

    pub fn failures(&self) -> usize {
        self.runs.iter().filter(|run| run.outcome.is_err()).count()
    }
}
