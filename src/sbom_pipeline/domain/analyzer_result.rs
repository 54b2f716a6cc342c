use serde::Deserialize;

/// The subset of an ORT analyzer result this tool reads.
///
/// Every list defaults to empty so that partially populated documents
/// still deserialize; anything beyond dependency ids is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzerResult {
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub scopes: Vec<Scope>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Scope {
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Dependency {
    /// ORT identifier, e.g. `NPM::lodash:4.17.21`. Missing ids read as empty.
    #[serde(default)]
    pub id: String,
}

impl AnalyzerResult {
    /// Iterates over every dependency id across all projects and scopes
    pub fn dependency_ids(&self) -> impl Iterator<Item = &str> {
        self.projects
            .iter()
            .flat_map(|project| project.scopes.iter())
            .flat_map(|scope| scope.dependencies.iter())
            .map(|dependency| dependency.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_nested_document() {
        let yaml = r#"
projects:
  - id: "Maven:com.example:app:1.0"
    scopes:
      - name: compile
        dependencies:
          - id: "Maven:org.slf4j:slf4j-api:2.0.9"
          - id: "Maven:com.google.guava:guava:32.1.2-jre"
      - name: test
        dependencies:
          - id: "Maven:junit:junit:4.13.2"
"#;
        let result: AnalyzerResult = serde_yaml_ng::from_str(yaml).unwrap();
        let ids: Vec<&str> = result.dependency_ids().collect();
        assert_eq!(
            ids,
            vec![
                "Maven:org.slf4j:slf4j-api:2.0.9",
                "Maven:com.google.guava:guava:32.1.2-jre",
                "Maven:junit:junit:4.13.2",
            ]
        );
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let yaml = r#"
projects:
  - id: "NPM::web:1.0.0"
  - scopes:
      - name: dev
"#;
        let result: AnalyzerResult = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(result.projects.len(), 2);
        assert_eq!(result.dependency_ids().count(), 0);
    }

    #[test]
    fn test_dependency_without_id_reads_as_empty() {
        let yaml = r#"
projects:
  - scopes:
      - dependencies:
          - linkage: DYNAMIC
"#;
        let result: AnalyzerResult = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(result.dependency_ids().collect::<Vec<_>>(), vec![""]);
    }
}
