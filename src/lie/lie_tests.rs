#[cfg(test)]
mod tests {
    use crate::lie::centralizer::centralizer;
    use crate::lie::classification::{Catalog, NILPOTENT_LIE_ALGEBRAS_7};
    use crate::lie::derivations::{derivation_when, derivations, derivations_parametric, xbrackets};
    use crate::lie::error::LieError;
    use crate::lie::gl::GL;
    use crate::lie::lie_algebra::LieAlgebra;
    use crate::lie::nikolayevsky::{
        Nikolayevsky, NikolayevskyKind, nikolayevsky_equations, nikolayevsky_like_derivations,
        nikolayevsky_like_derivations_parametric,
    };
    use crate::lie::study::{ReportStyle, StudyConfig, study_catalog, study_group};
    use crate::lie::vector_space::VectorSpace;
    use crate::symbolic::symbolic_engine::Expr;
    use crate::symbolic::symbolic_vectors::{ExprMatrix, ExprVector};
    use log::LevelFilter;
    use std::path::PathBuf;

    fn heisenberg() -> LieAlgebra {
        LieAlgebra::from_structure_constants("0,0,12").unwrap()
    }

    fn lambda_family() -> LieAlgebra {
        LieAlgebra::with_parameters("0,0,0,12,[lambda]*13", &["lambda"]).unwrap()
    }

    fn diagonal(entries: &[Expr]) -> ExprMatrix {
        ExprMatrix::diagonal_matrix(&ExprVector::new(entries.to_vec()))
    }

    /////////////////////////////////////// derivations ///////////////////////////////////////

    #[test]
    fn test_derivations_of_heisenberg() {
        let G = heisenberg();
        let gl = GL::new(3);
        let der = derivations(&G, &gl).unwrap();
        // gl(2) acting on span(e1, e2), and the two maps e_i -> e3
        assert_eq!(der.dimension(), 6);
        assert!(der.contains(&gl.e(3, 1)).unwrap());
        assert!(der.contains(&gl.e(1, 2)).unwrap());
        assert!(!der.contains(&gl.e(1, 3)).unwrap());
        let trace_like = &gl.e(1, 1) + &gl.e(3, 3);
        assert!(der.contains(&trace_like).unwrap());
        assert!(!der.contains(&gl.e(1, 1)).unwrap());
    }

    #[test]
    fn test_derivations_of_abelian() {
        let G = LieAlgebra::from_structure_constants("0,0,0").unwrap();
        let gl = GL::new(3);
        assert_eq!(derivations(&G, &gl).unwrap().dimension(), 9);
    }

    #[test]
    fn test_derivations_satisfy_identity() {
        for structure_constants in ["0,0,12", "0,0,12,13", "0,0,0,12,13+24"] {
            let G = LieAlgebra::from_structure_constants(structure_constants).unwrap();
            let gl = GL::new(G.dimension());
            let der = derivations(&G, &gl).unwrap();
            for D in der.e() {
                let A = gl.gl_to_matrix(D);
                assert!(
                    xbrackets(&G, &gl, &A).iter().all(|x| x.is_zero()),
                    "{} {}",
                    structure_constants,
                    D
                );
            }
        }
    }

    #[test]
    fn test_derivation_when() {
        let G = heisenberg();
        let gl = GL::new(3);
        // e3 -> e1 is not a derivation
        assert!(!derivation_when(&G, &gl, &gl.e(1, 3)).is_empty());
        assert!(derivation_when(&G, &gl, &gl.e(1, 2)).is_empty());
        // on the family, e5 -> e5 is a derivation only for lambda = 0
        let F = lambda_family();
        let gl5 = GL::new(5);
        let conditions = derivation_when(&F, &gl5, &gl5.e(5, 5));
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0], Expr::from_int(-1) * Expr::Var("lambda"));
    }

    #[test]
    fn test_parametric_bounds() {
        let F = lambda_family();
        let gl = GL::new(5);
        let bounds = derivations_parametric(&F, &gl).unwrap();
        let (smaller, larger) = (bounds.smaller(), bounds.larger());
        assert!(smaller.dimension() <= larger.dimension());
        assert!(smaller.is_subspace_of(&larger).unwrap());
        // the smaller bound consists of derivations for every lambda
        for D in smaller.e() {
            assert!(derivation_when(&F, &gl, D).is_empty(), "{}", D);
        }
    }

    #[test]
    fn test_bounds_hold_for_each_lambda() {
        let F = lambda_family();
        let gl = GL::new(5);
        let bounds = derivations_parametric(&F, &gl).unwrap();
        assert_eq!(bounds.basis_of_smaller_space.len(), 13);
        assert_eq!(bounds.basis_of_larger_space.len(), 16);
        // for a generic lambda the derivations coincide with the smaller bound
        assert_eq!(derivations(&F, &gl).unwrap().dimension(), 13);

        // D(lambda) is squeezed between the bounds specialised at lambda, also where it jumps
        for (lambda, structure_constants, dimension) in
            [(0, "0,0,0,12,0", 16), (1, "0,0,0,12,13", 13), (-2, "0,0,0,12,-2*13", 13)]
        {
            let value = Expr::from_int(lambda);
            let specialise = |basis: &[ExprVector]| {
                let vectors = basis
                    .iter()
                    .map(|b| b.substitute("lambda", &value))
                    .collect();
                VectorSpace::new(gl.dimension(), vectors)
            };
            let outer = specialise(&bounds.basis_of_larger_space);
            let inner = specialise(&bounds.basis_of_smaller_space);
            let G = LieAlgebra::from_structure_constants(structure_constants).unwrap();
            let der = derivations(&G, &gl).unwrap();
            assert_eq!(der.dimension(), dimension, "lambda = {}", lambda);
            assert!(der.is_subspace_of(&outer).unwrap(), "lambda = {}", lambda);
            assert!(inner.is_subspace_of(&der).unwrap(), "lambda = {}", lambda);
        }
    }

    #[test]
    fn test_parametric_bounds_without_parameters_are_exact() {
        let G = LieAlgebra::from_structure_constants("0,0,12,13").unwrap();
        let gl = GL::new(4);
        let bounds = derivations_parametric(&G, &gl).unwrap();
        assert!(bounds.is_exact());
        let der = derivations(&G, &gl).unwrap();
        assert_eq!(bounds.larger().dimension(), der.dimension());
        assert!(bounds.larger().is_subspace_of(&der).unwrap());
    }

    /////////////////////////////////////// Nikolayevsky ///////////////////////////////////////

    #[test]
    fn test_nikolayevsky_of_heisenberg() {
        let G = heisenberg();
        let gl = GL::new(3);
        let affine = nikolayevsky_like_derivations(&G, &gl).unwrap();
        let expected = diagonal(&[
            Expr::rational(2, 3),
            Expr::rational(2, 3),
            Expr::rational(4, 3),
        ]);
        assert_eq!(gl.gl_to_matrix(&affine.N), expected);
        assert_eq!(affine.W.dimension(), 2);
        assert!(affine.W.contains(&gl.e(3, 1)).unwrap());
        assert!(affine.W.contains(&gl.e(3, 2)).unwrap());
        let parametric = nikolayevsky_like_derivations_parametric(&G, &gl).unwrap();
        assert_eq!(parametric.N, affine.N);

        let nik = Nikolayevsky::new(&G, &gl, &affine.N);
        assert_eq!(nik.kind(), NikolayevskyKind::Diagonal);
        assert_eq!(nik.to_string(), "(2/3,2/3,4/3)");
    }

    #[test]
    fn test_nikolayevsky_of_abelian_is_identity() {
        let G = LieAlgebra::from_structure_constants("0,0,0").unwrap();
        let gl = GL::new(3);
        let affine = nikolayevsky_like_derivations(&G, &gl).unwrap();
        assert_eq!(gl.gl_to_matrix(&affine.N), ExprMatrix::identity(3));
        assert_eq!(affine.dimension(), 0);
    }

    #[test]
    fn test_trace_identity() {
        for structure_constants in ["0,0,12", "0,0,12,13", "0,0,0,12,13+24"] {
            let G = LieAlgebra::from_structure_constants(structure_constants).unwrap();
            let gl = GL::new(G.dimension());
            let der = derivations(&G, &gl).unwrap();
            let affine = nikolayevsky_like_derivations(&G, &gl).unwrap();
            let equations = nikolayevsky_equations(&affine.N, der.e(), &gl);
            assert!(equations.iter().all(|e| e.is_zero()), "{}", structure_constants);
            assert!(derivation_when(&G, &gl, &affine.N).is_empty());
            for w in affine.W.e() {
                assert!(der.contains(w).unwrap());
            }
        }
    }

    #[test]
    fn test_nikolayevsky_kinds() {
        let G = heisenberg();
        let gl = GL::new(3);
        let conditional = Nikolayevsky::new(&G, &gl, &gl.e(1, 3));
        assert_eq!(conditional.kind(), NikolayevskyKind::Conditional);
        assert!(
            conditional
                .to_string()
                .starts_with("cannot compute; Nikolayevsky derivation takes the form [[0,0,1]")
        );

        let nilpotent = Nikolayevsky::new(&G, &gl, &gl.e(1, 2));
        assert_eq!(nilpotent.kind(), NikolayevskyKind::IfDiagonalizable);
        assert_eq!(
            nilpotent.to_string(),
            "if diagonalizable, [[0,1,0],[0,0,0],[0,0,0]]"
        );

        let diag = &(&gl.e(1, 1) + &gl.e(2, 2)) + &gl.e(3, 3).scale(&Expr::from_int(2));
        let diagonal_kind = Nikolayevsky::new(&G, &gl, &diag);
        assert_eq!(diagonal_kind.kind(), NikolayevskyKind::Diagonal);
        assert_eq!(diagonal_kind.to_string(), "(1,1,2)");
        assert_eq!(NikolayevskyKind::IfDiagonalizable.to_string(), "if diagonalizable");
    }

    /////////////////////////////////////// centralizer ///////////////////////////////////////

    #[test]
    fn test_centralizer_of_diagonal() {
        let gl = GL::new(2);
        let N = &gl.e(1, 1) + &gl.e(2, 2).scale(&Expr::from_int(2));
        let C = centralizer(&N, &gl.forms(), &gl).unwrap();
        assert_eq!(C.dimension(), 2);
        assert!(C.contains(&gl.e(1, 1)).unwrap());
        assert!(C.contains(&gl.e(2, 2)).unwrap());
        assert!(!C.contains(&gl.e(1, 2)).unwrap());
        let identity = gl.e(1, 1) + gl.e(2, 2);
        let scalar = centralizer(&identity, &gl.forms(), &gl).unwrap();
        assert_eq!(scalar.dimension(), 4);
        let none = centralizer(&N, &VectorSpace::new(4, vec![gl.e(2, 1)]), &gl).unwrap();
        assert_eq!(none.dimension(), 0);
    }

    #[test]
    fn test_centralizer_elements_commute() {
        let G = LieAlgebra::from_structure_constants("0,0,0,12,13+24").unwrap();
        let gl = GL::new(5);
        let affine = nikolayevsky_like_derivations(&G, &gl).unwrap();
        let C = centralizer(&affine.N, &affine.W, &gl).unwrap();
        let N = gl.gl_to_matrix(&affine.N);
        for c in C.e() {
            assert!(N.commutator(&gl.gl_to_matrix(c)).is_zero());
        }
        assert!(C.is_subspace_of(&affine.W).unwrap());
    }

    /////////////////////////////////////// study ///////////////////////////////////////

    #[test]
    fn test_study_heisenberg() {
        let report = study_group(&heisenberg(), ReportStyle::Plain).unwrap();
        assert_eq!(report.nikolayevsky.kind(), NikolayevskyKind::Diagonal);
        assert!(report.generic_derivation_conditions.is_empty());
        let centralizer = report.centralizer.as_ref().unwrap();
        assert_eq!(centralizer.dimension, 0);
        assert!(centralizer.generic_element.is_none());
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Lie algebra: (0,0,12)");
        assert_eq!(lines[1], "Nikolayevsky derivation: (2/3,2/3,4/3)");
        assert!(lines[2].starts_with("generic derivation [["));
        assert_eq!(lines[3], "derivation when the following are zero: {}");
        assert_eq!(lines[4], "centralizer contained in space of dimension 0");
        assert_eq!(lines.len(), 5);
        assert_eq!(report.outcome(), "diagonal");
    }

    #[test]
    fn test_study_latex() {
        let report = study_group(&heisenberg(), ReportStyle::Latex).unwrap();
        let text = report.to_string();
        assert!(text.starts_with("Lie algebra: (0,0,e^{12})"));
        assert!(text.contains("\\begin{pmatrix}"));
        assert!(text.contains("\\{\\}"));
    }

    #[test]
    fn test_study_is_idempotent() {
        let G = LieAlgebra::from_structure_constants("0,0,12,13").unwrap();
        let first = study_group(&G, ReportStyle::Plain).unwrap();
        let second = study_group(&G, ReportStyle::Plain).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_study_parametric_family() {
        let report = study_group(&lambda_family(), ReportStyle::Plain).unwrap();
        assert!(report.to_string().starts_with("Lie algebra: (0,0,0,12,[lambda]*13)"));
        assert!(!report.nikolayevsky.is_zero());
    }

    #[test]
    fn test_study_config() {
        let input = "study\ncatalog: Nilpotent7\nentries: 3, 1\nstyle: latex\nlogging\nloglevel: debug\nlog_file: false\noutput\nreport_file: report.txt\n";
        let config = StudyConfig::from_task_document(input).unwrap();
        assert_eq!(config.catalog, Catalog::Nilpotent7);
        assert_eq!(config.entries, Some(vec![3, 1]));
        assert_eq!(config.style, ReportStyle::Latex);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(!config.log_file);
        assert_eq!(config.report_file, Some(PathBuf::from("report.txt")));

        let defaults = StudyConfig::from_task_document("study\nstyle: plain").unwrap();
        assert_eq!(defaults.catalog, Catalog::NonNiceNilpotent7);
        assert_eq!(defaults.entries, None);
        assert_eq!(defaults.report_file, None);

        for bad in [
            "study\ncatalog: Solvable7",
            "study\nentries: 0",
            "study\nstyle: html",
            "logging\nlog_file: yes",
            "study catalog",
        ] {
            assert!(
                matches!(StudyConfig::from_task_document(bad), Err(LieError::Config(_))),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn test_study_catalog_rejects_missing_entries() {
        let config = StudyConfig {
            catalog: Catalog::Nilpotent7,
            entries: Some(vec![1, 1000]),
            ..StudyConfig::default()
        };
        assert!(matches!(
            study_catalog(&config),
            Err(LieError::NoSuchEntry { index: 1000, size: 182 })
        ));
    }

    #[test]
    fn test_study_catalog_single_entry() {
        let config = StudyConfig {
            catalog: Catalog::Nilpotent7,
            entries: Some(vec![1]),
            ..StudyConfig::default()
        };
        let study = study_catalog(&config).unwrap();
        assert_eq!(study.runs.len(), 1);
        assert_eq!(study.failures(), 0);
        assert_eq!(study.runs[0].name, NILPOTENT_LIE_ALGEBRAS_7.name(1).unwrap());
        assert!(study.report().starts_with("Nilpotent7 1: 1\nLie algebra: "));
        let table = study.summary_table().to_string();
        assert!(table.contains("structure constants"));
        assert!(table.contains("0, 0, 0, 0, 12, 34, 36"));
    }
}
