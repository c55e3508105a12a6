use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

struct TestContext {
    _dir: TempDir,
    pool_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let pool_path = dir.path().join("repo_pool.json");

        let mut records = Vec::new();
        for i in 0..10 {
            records.push(format!(
                r#"{{
                    "id": "u{i}",
                    "name": "User {i}",
                    "rollOrRegistrationId": "R{i}",
                    "email": "u{i}@example.com",
                    "skills": {{"advanced": ["skill{i}"], "intermediate": ["docker"]}},
                    "interests": ["rust", "topic{m}"]
                }}"#,
                i = i,
                m = i % 3,
            ));
        }

        let mut pool_file = File::create(&pool_path).unwrap();
        writeln!(pool_file, "[{}]", records.join(",")).unwrap();

        Self {
            _dir: dir,
            pool_path,
        }
    }
}

fn run(bin: &str, args: &[&str]) -> String {
    let output = Command::new(bin).args(args).output().expect("Run failed");
    assert!(
        output.status.success(),
        "STDERR:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_deterministic_output() {
    let _ = Command::new("cargo")
        .arg("build")
        .arg("--release")
        .status()
        .unwrap();

    let ctx = TestContext::new();
    let bin = "./target/release/teamforge";

    let recommend_args = [
        "recommend",
        "--member",
        "u0",
        "--pool",
        ctx.pool_path.to_str().unwrap(),
        "--seed",
        "12345",
        "--generations",
        "20",
        "--json",
    ];
    let rec_a = run(bin, &recommend_args);
    let rec_b = run(bin, &recommend_args);
    assert_eq!(rec_a, rec_b, "recommendation output differs for equal seeds");
    assert!(rec_a.contains("\"teamMembers\""));

    let partition_args = [
        "partition",
        "--pool",
        ctx.pool_path.to_str().unwrap(),
        "--seed",
        "12345",
        "--generations",
        "20",
        "--json",
    ];
    let part_a = run(bin, &partition_args);
    let part_b = run(bin, &partition_args);
    assert_eq!(part_a, part_b, "partition output differs for equal seeds");
    assert!(part_a.contains("\"buckets\""));

    // Different seeds are allowed to differ; they must still succeed.
    let mut other_seed = recommend_args;
    other_seed[6] = "54321";
    run(bin, &other_seed);
}
