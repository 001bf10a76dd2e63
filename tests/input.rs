use std::fs;
use std::path::PathBuf;

use clawparse::errors::Error;
use clawparse::renderers::PlainRenderer;
use clawparse::{run, Config, Summary};

const EXAMPLE: &str = "\
Button A: X+94, Y+34
Button B: X+22, Y+67
Prize: X=8400, Y=5400

Button A: X+26, Y+66
Button B: X+67, Y+21
Prize: X=12748, Y=12176

Button A: X+17, Y+86
Button B: X+84, Y+37
Prize: X=7870, Y=6450

Button A: X+69, Y+23
Button B: X+27, Y+71
Prize: X=18641, Y=10279
";

fn write_input(name: &str, contents: &str) -> Config {
    let input: PathBuf = std::env::temp_dir().join(format!("clawparse-{}-{}.txt", name, std::process::id()));
    fs::write(&input, contents).unwrap();
    Config { input }
}

fn render(config: &Config) -> (Result<Summary, Error>, String) {
    let mut renderer = PlainRenderer::new(Vec::new());
    let result = run(config, &mut renderer);
    (result, String::from_utf8(renderer.into_inner()).unwrap())
}

#[test]
fn single_block_gives_six_lines() {
    let config = write_input("single", "Button A: X+94, Y+34\nButton B: X+22, Y+67\nPrize: X=8400, Y=5400\n");
    let (result, output) = render(&config);

    assert_eq!(result.unwrap(), Summary { blocks: 1 });
    assert_eq!(output, "94\n22\n8400\n34\n67\n5400\n");
}

#[test]
fn six_lines_per_block() {
    let config = write_input("example", EXAMPLE);
    let (result, output) = render(&config);

    assert_eq!(result.unwrap(), Summary { blocks: 4 });
    assert_eq!(output.lines().count(), 24);
    assert_eq!(
        output.lines().skip(18).collect::<Vec<_>>(),
        vec!["69", "27", "18641", "23", "71", "10279"]
    );
}

#[test]
fn running_twice_gives_identical_output() {
    let config = write_input("idempotent", EXAMPLE);
    let (_, first) = render(&config);
    let (_, second) = render(&config);

    assert_eq!(first, second);
}

#[test]
fn crlf_input_matches_lf_input() {
    let lf = write_input("lf", EXAMPLE);
    let crlf = write_input("crlf", &EXAMPLE.replace('\n', "\r\n"));

    let (lf_result, lf_output) = render(&lf);
    let (crlf_result, crlf_output) = render(&crlf);

    assert_eq!(lf_result.unwrap(), crlf_result.unwrap());
    assert_eq!(lf_output, crlf_output);
}

#[test]
fn missing_prize_y_stops_the_run() {
    let input = EXAMPLE.replace("Prize: X=12748, Y=12176", "Prize: X=12748");
    let config = write_input("missing-y", &input);
    let (result, output) = render(&config);

    match result {
        Err(Error::Pattern(error)) => {
            assert_eq!(error.line(), 7);
            assert!(error.to_string().ends_with("expected `Y=<digits>` in block 2"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(output, "94\n22\n8400\n34\n67\n5400\n");
}

#[test]
fn missing_file_fails_before_output() {
    let input = std::env::temp_dir().join("clawparse-does-not-exist.txt");
    let _ = fs::remove_file(&input);
    let (result, output) = render(&Config { input });

    assert!(matches!(result, Err(Error::Io { .. })));
    assert!(output.is_empty());
}
