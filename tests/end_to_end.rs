use orrery::prelude::*;
use orrery::ParseError;

const TWO_BODY: &str = "Star 10 red 1000 0 0 0 0\nPlanet 5 blue 10 3 4 0 0\n";

struct Collect(Vec<StatisticsPlots>);

impl PlotSurface for Collect {
    fn show(&mut self, plots: &StatisticsPlots) -> orrery::Result<()> {
        self.0.push(plots.clone());
        Ok(())
    }
}

#[test]
fn load_record_and_render() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("system.txt");
    std::fs::write(&input, TWO_BODY).unwrap();

    let bodies = load(&input).unwrap();
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0].kind(), BodyKind::Star);
    assert_eq!(bodies[1].kind(), BodyKind::Planet);

    let artifact = StatisticsArtifact::new(dir.path().join(DEFAULT_ARTIFACT_NAME));
    artifact.reset().unwrap();
    assert!(!artifact.exists());

    let written = record_sample(&artifact, &bodies, 1.0, ReferencePolicy::SingleStar).unwrap();
    assert_eq!(written, 1);
    assert_eq!(
        artifact.read_samples().unwrap(),
        vec![Sample {
            speed: 0.0,
            distance: 5.0,
            time: 1.0
        }]
    );

    let mut surface = Collect(Vec::new());
    render(&artifact, &mut surface).unwrap();
    assert_eq!(surface.0.len(), 1);
    assert_eq!(surface.0[0].sample_count, 1);
}

#[test]
fn fresh_run_does_not_mix_with_stale_samples() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("system.txt");
    std::fs::write(&input, TWO_BODY).unwrap();
    let bodies = load(&input).unwrap();

    let artifact = StatisticsArtifact::new(dir.path().join("stats.txt"));
    for time in [0.0, 1.0, 2.0] {
        record_sample(&artifact, &bodies, time, ReferencePolicy::SingleStar).unwrap();
    }
    assert_eq!(artifact.read_samples().unwrap().len(), 3);

    let mut run = StatisticsRun::start(artifact.clone(), ReferencePolicy::SingleStar).unwrap();
    run.record(&bodies, 10.0).unwrap();
    let artifact = run.finish().unwrap();

    let samples = artifact.read_samples().unwrap();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].time, 10.0);
}

#[test]
fn malformed_number_aborts_strict_load() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("system.txt");
    std::fs::write(
        &input,
        "Planet 5 blue 10 3 4 0 0\nStar 10 red notanumber 0 0 0 0\n",
    )
    .unwrap();

    let err = load(&input).unwrap_err();
    assert!(matches!(
        err.parse_error(),
        Some(ParseError::Numeric { field: "mass", .. })
    ));

    let report = load_lenient(&input).unwrap();
    assert_eq!(report.bodies.len(), 1);
    assert_eq!(report.parse_failures(), 1);
}

#[test]
fn saved_file_reloads_identically() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("system.txt");
    std::fs::write(
        &input,
        "# inner system\nStar 30 yellow 1.98892E30 0 0 0 0\nComet 1 white 1 0 0 0 0\nPlanet 5 blue 5.974E24 149.6E9 0 0 29.783E3\n",
    )
    .unwrap();

    let bodies = load(&input).unwrap();
    assert_eq!(bodies.len(), 2);

    let output = dir.path().join("saved.txt");
    save(&output, &bodies).unwrap();
    assert_eq!(load(&output).unwrap(), bodies);

    for (line, body) in std::fs::read_to_string(&output)
        .unwrap()
        .lines()
        .zip(&bodies)
    {
        assert_eq!(line, format_line(body));
        assert_eq!(&parse_line(line, body.kind()).unwrap(), body);
    }
}
