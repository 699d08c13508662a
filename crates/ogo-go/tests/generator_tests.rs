use ogo_core::config::OgoConfig;
use ogo_core::model;
use ogo_core::{CodeGenerator, parse};
use ogo_go::dispatch::{ContentFamily, ContentTypeTables};
use ogo_go::{GoClientConfig, GoClientGenerator};

const PETSTORE: &str = r#"
openapi: 3.0.3
info:
  title: Petstore
  version: 1.0.0
paths:
  /pets:
    get:
      operationId: listPets
      responses:
        "200":
          description: A list of pets
          content:
            application/json:
              schema:
                type: array
                items:
                  $ref: '#/components/schemas/Pet'
        default:
          description: Unexpected error
          content:
            application/json:
              schema:
                $ref: '#/components/schemas/Error'
    post:
      operationId: createPet
      requestBody:
        required: true
        content:
          application/json:
            schema:
              $ref: '#/components/schemas/Pet'
      responses:
        "201":
          description: Created
          content:
            application/xml:
              schema:
                $ref: '#/components/schemas/Pet'
        "204":
          description: Nothing to report
components:
  schemas:
    Pet:
      type: object
      properties:
        id:
          type: integer
          format: int64
        name:
          type: string
    Error:
      type: object
      properties:
        code:
          type: integer
        message:
          type: string
"#;

fn generate(yaml: &str) -> String {
    let spec = parse::from_yaml(yaml).unwrap();
    let ops = model::build_operations(&spec).unwrap();
    let config = GoClientConfig {
        package: "petclient".to_string(),
        tables: ContentTypeTables::default(),
    };
    let files = GoClientGenerator.generate(&ops, &config).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, "responses.go");
    files[0].content.clone()
}

#[test]
fn generates_package_and_imports() {
    let content = generate(PETSTORE);
    assert!(content.starts_with("// Code generated by ogo. DO NOT EDIT.\n"));
    assert!(content.contains("package petclient\n"));
    for import in ["\"encoding/json\"", "\"encoding/xml\"", "\"io\"", "\"net/http\"", "\"strings\""] {
        assert!(content.contains(import), "missing import {import}");
    }
    // No YAML response anywhere in the spec, so no yaml import.
    assert!(!content.contains("gopkg.in/yaml.v2"));
}

#[test]
fn generates_envelope_per_operation() {
    let content = generate(PETSTORE);

    assert!(content.contains("type ListPetsResponse struct {"));
    assert!(content.contains("JSON200 *[]Pet"));
    assert!(content.contains("JSONDefault *Error"));

    assert!(content.contains("type CreatePetResponse struct {"));
    assert!(content.contains("XML201 *Pet"));

    // Accessors are emitted for every envelope.
    assert!(content.contains("func (r ListPetsResponse) Status() string {"));
    assert!(content.contains("func (r CreatePetResponse) StatusCode() int {"));
}

#[test]
fn generates_parse_functions_with_dispatch() {
    let content = generate(PETSTORE);

    assert!(content.contains("func ParseListPetsResponse(rsp *http.Response) (*ListPetsResponse, error) {"));
    assert!(content.contains("bodyBytes, err := io.ReadAll(rsp.Body)"));

    // The dispatch switch is embedded, indented one level.
    assert!(content.contains("\tswitch {\n"));
    assert!(content.contains(
        "\tcase strings.Contains(rsp.Header.Get(\"Content-Type\"), \"json\") && rsp.StatusCode == 200:"
    ));
    assert!(content.contains("\t\tresponse.JSON200 = &dest"));

    // 204 keeps its clause even without a decode step.
    assert!(content.contains("\tcase rsp.StatusCode == 204:"));
    assert!(content.contains("\t\tbreak // No content-type"));
}

#[test]
fn empty_spec_generates_nothing() {
    let yaml = r#"
openapi: 3.0.3
info:
  title: Empty
  version: 1.0.0
paths: {}
"#;
    let spec = parse::from_yaml(yaml).unwrap();
    let ops = model::build_operations(&spec).unwrap();
    let config = GoClientConfig {
        package: "client".to_string(),
        tables: ContentTypeTables::default(),
    };
    let files = GoClientGenerator.generate(&ops, &config).unwrap();
    assert!(files.is_empty());
}

#[test]
fn classification_failure_names_the_operation() {
    let yaml = r#"
openapi: 3.0.3
info:
  title: Broken
  version: 1.0.0
paths:
  /things:
    get:
      operationId: listThings
      responses:
        "2xx":
          description: lowercase range is not a valid key
          content:
            application/json:
              schema:
                type: string
"#;
    let spec = parse::from_yaml(yaml).unwrap();
    let ops = model::build_operations(&spec).unwrap();
    let config = GoClientConfig {
        package: "client".to_string(),
        tables: ContentTypeTables::default(),
    };
    let err = GoClientGenerator.generate(&ops, &config).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("listThings"), "got: {message}");
    assert!(message.contains("2xx"), "got: {message}");
}

#[test]
fn table_override_from_project_config() {
    let mut cfg = OgoConfig::default();
    cfg.content_types = Some(serde_json::json!({
        "json": ["application/vnd.api+json"]
    }));
    let gen_config = GoClientConfig::from_project(&cfg).unwrap();
    assert_eq!(
        gen_config.tables.classify("application/vnd.api+json"),
        ContentFamily::Json
    );
    // The default JSON media type is gone once the section is overridden.
    assert_eq!(
        gen_config.tables.classify("application/json"),
        ContentFamily::Unsupported
    );
}

#[test]
fn generated_files_write_to_disk() {
    let content = generate(PETSTORE);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("responses.go");
    std::fs::write(&path, &content).unwrap();
    let read_back = std::fs::read_to_string(&path).unwrap();
    assert_eq!(read_back, content);
}
