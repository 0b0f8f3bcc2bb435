use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const MAIN_GO: &str = r#"package main

import (
	"fmt"

	"example.com/app/messages"
)

const banner = "banner: %s"

func main() {
	fmt.Sprintf("Hello, %s!", "world")
	fmt.Sprintf(banner, "v1")
	fmt.Sprintf(footer)
	fmt.Sprintf(messages.Welcome)
	fmt.Println("not extracted")
}
"#;

const FOOTER_GO: &str = r#"package main

const footer = "footer %d"
"#;

const MESSAGES_GO: &str = r#"package messages

var Welcome = `welcome back`
"#;

fn app_project() -> Result<CliTest> {
    let test = CliTest::with_file("example.com/app/main.go", MAIN_GO)?;
    test.write_file("example.com/app/footer.go", FOOTER_GO)?;
    test.write_file("example.com/app/messages/messages.go", MESSAGES_GO)?;
    Ok(test)
}

#[test]
fn test_extract_all_argument_kinds() -> Result<()> {
    let test = app_project()?;

    assert_cmd_snapshot!(test.extract_command().arg("example.com/app/main.go"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Hello, %s!
    banner: %s
    footer %d
    welcome back

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_extract_json_format() -> Result<()> {
    let test = app_project()?;

    assert_cmd_snapshot!(
        test.extract_command()
            .args(["--format", "json", "example.com/app/main.go"]),
        @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "strings": [
        "Hello, %s!",
        "banner: %s",
        "footer %d",
        "welcome back"
      ]
    }

    ----- stderr -----
    "#
    );

    Ok(())
}

#[test]
fn test_extract_directory_deduplicates_across_files() -> Result<()> {
    let test = app_project()?;
    // extra.go reads `banner` from main.go, which is also an input.
    test.write_file(
        "example.com/app/extra.go",
        r#"package main

import "fmt"

func extra() string {
	return fmt.Sprintf(banner, "again")
}
"#,
    )?;

    assert_cmd_snapshot!(test.extract_command().arg("example.com/app"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Hello, %s!
    banner: %s
    footer %d
    welcome back

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_extract_skips_test_files_and_vendor() -> Result<()> {
    let test = CliTest::with_file(
        "app/main.go",
        r#"package main

import "fmt"

func main() { fmt.Sprintf("from main") }
"#,
    )?;
    test.write_file(
        "app/main_test.go",
        r#"package main

import "fmt"

func helper() { fmt.Sprintf("from test") }
"#,
    )?;
    test.write_file(
        "app/vendor/dep/dep.go",
        r#"package dep

import "fmt"

func Dep() { fmt.Sprintf("from vendor") }
"#,
    )?;

    assert_cmd_snapshot!(test.extract_command().arg("app"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    from main

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_extract_glob_pattern() -> Result<()> {
    let test = CliTest::with_file(
        "cmd/api/main.go",
        r#"package main

import "fmt"

func main() { fmt.Sprintf("api") }
"#,
    )?;
    test.write_file(
        "cmd/worker/main.go",
        r#"package main

import "fmt"

func main() { fmt.Sprintf("worker") }
"#,
    )?;
    test.write_file(
        "internal/lib.go",
        r#"package internal

import "fmt"

func Lib() { fmt.Sprintf("internal") }
"#,
    )?;

    assert_cmd_snapshot!(test.extract_command().arg("cmd/*/main.go"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    api
    worker

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_extract_custom_target_function() -> Result<()> {
    let test = CliTest::with_file(
        "app/main.go",
        r#"package main

import (
	"fmt"

	tr "github.com/acme/i18n"
)

func main() {
	tr.T("translated")
	fmt.Sprintf("formatted")
}
"#,
    )?;

    assert_cmd_snapshot!(
        test.extract_command()
            .args(["-f", "github.com/acme/i18n.T", "app/main.go"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    translated

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_extract_config_file_and_cli_override() -> Result<()> {
    let test = CliTest::with_file(
        "app/main.go",
        r#"package main

import (
	"fmt"
	"log"
)

func main() {
	log.Printf("logged")
	fmt.Sprintf("formatted")
}
"#,
    )?;
    test.write_file(
        ".xtractrc.json",
        r#"{ "function": "log.Printf", "format": "json" }"#,
    )?;

    assert_cmd_snapshot!(test.extract_command().arg("app"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "strings": [
        "logged"
      ]
    }

    ----- stderr -----
    "#);

    assert_cmd_snapshot!(
        test.extract_command()
            .args(["--func", "fmt.Sprintf", "--format", "text", "app"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    formatted

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_extract_module_root_from_env() -> Result<()> {
    let test = CliTest::with_file(
        "gopath/src/example.com/app/main.go",
        r#"package main

import (
	"fmt"

	"example.com/lib"
)

func main() { fmt.Sprintf(lib.Name) }
"#,
    )?;
    test.write_file(
        "gopath/src/example.com/lib/lib.go",
        "package lib\n\nconst Name = \"from lib\"\n",
    )?;

    assert_cmd_snapshot!(
        test.command()
            .env("XTRACT_MODULE_ROOT", "gopath/src")
            .args(["extract", "gopath/src/example.com/app"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    from lib

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_extract_skips_unresolvable_calls() -> Result<()> {
    let test = CliTest::with_file(
        "app/main.go",
        r#"package main

import "fmt"

func main() {
	fmt.Sprintf()
	fmt.Sprintf(undefined)
	fmt.Sprintf(compute())
	fmt.Sprintf("")
	fmt.Sprintf("kept")
}
"#,
    )?;

    assert_cmd_snapshot!(test.extract_command().arg("app"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    kept

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_extract_output_file() -> Result<()> {
    let test = app_project()?;

    assert_cmd_snapshot!(
        test.extract_command()
            .args(["-o", "strings.txt", "example.com/app/main.go"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    "
    );

    assert_eq!(
        test.read_file("strings.txt")?,
        "Hello, %s!\nbanner: %s\nfooter %d\nwelcome back\n"
    );

    Ok(())
}

#[test]
fn test_extract_missing_input() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.extract_command().arg("nope.go"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Input path does not exist: nope.go
    ");

    Ok(())
}

#[test]
fn test_extract_invalid_target_function() -> Result<()> {
    let test = CliTest::with_file("main.go", "package main\n")?;

    assert_cmd_snapshot!(test.extract_command().args(["-f", "Sprintf", "main.go"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: target function must be a qualified name like 'fmt.Sprintf' but found 'Sprintf'
    ");

    Ok(())
}

#[test]
fn test_extract_unparsable_input_is_fatal() -> Result<()> {
    let test = CliTest::with_file("broken.go", "package main\n\nfunc main( {\n")?;

    let output = test.extract_command().arg("broken.go").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.starts_with("Error: Failed to parse"), "{stderr}");
    assert!(stderr.contains("broken.go"), "{stderr}");

    Ok(())
}

#[test]
fn test_extract_requires_patterns() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("extract").output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("<PATTERNS>"), "{stderr}");

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Usage: xtract"), "{stdout}");
    assert!(stdout.contains("extract"), "{stdout}");

    Ok(())
}

#[test]
fn test_verbose_reports_summary_and_skips() -> Result<()> {
    let test = CliTest::with_file(
        "app/main.go",
        r#"package main

import "fmt"

func main() {
	fmt.Sprintf()
	fmt.Sprintf("one")
}
"#,
    )?;

    let output = test.extract_command().args(["-v", "app"]).output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "one\n");
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("warning:"), "{stderr}");
    assert!(stderr.contains("skipping niladic call to fmt.Sprintf"), "{stderr}");
    assert!(
        stderr.contains("Processed 1 file: 2 matching calls, 1 unique string"),
        "{stderr}"
    );
    assert!(stderr.contains("1 call skipped"), "{stderr}");

    Ok(())
}
