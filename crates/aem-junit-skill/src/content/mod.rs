//! Static documents printed by the CLI.
//!
//! Everything here is fixed at compile time. The Maven blocks reference
//! their versions through `${...}` properties that are declared in the same
//! block, so the output can be pasted into a `pom.xml` as-is.

mod templates;

pub use templates::TemplateKind;
pub use templates::normalize_class_name;
pub use templates::parse_class_name;

pub const PROGRAM_NAME: &str = "aem-junit-skill";

pub const HELP: &str = concat!(
    r#"
AEM JUnit Testing Skill v"#,
    env!("CARGO_PKG_VERSION"),
    r#"

Usage: aem-junit-skill <command>

Commands:
  help                 Show this help message
  guide                Show the full testing guide
  quickstart           Create a quick start test project
  examples             List available examples
  deps                 Show required Maven dependencies
  template <type>      Generate test template (model|service|component|servlet)
  config               Show pom.xml configuration
  completions <shell>  Print a shell completion script

Examples:
  aem-junit-skill guide
  aem-junit-skill template model MyModel
  aem-junit-skill deps
  aem-junit-skill quickstart

For full documentation, visit: https://github.com/narendragandhi/aem-junit-skill
"#
);

pub const DEPS: &str = r#"
# AEM JUnit Testing - Maven Dependencies

Add these to your pom.xml:

<properties>
    <aem.sdk.api>2025.11.23482.20251120T200914Z-251200</aem.sdk.api>
    <aem-mock.version>5.6.4</aem-mock.version>
    <junit.version>5.11.0</junit.version>
    <mockito.version>5.14.0</mockito.version>
</properties>

<dependencies>
    <!-- wcm.io AEM Mock (MUST be before AEM SDK API) -->
    <dependency>
        <groupId>io.wcm</groupId>
        <artifactId>io.wcm.testing.aem-mock.junit5</artifactId>
        <version>${aem-mock.version}</version>
        <scope>test</scope>
    </dependency>

    <!-- AEM SDK API -->
    <dependency>
        <groupId>com.adobe.aem</groupId>
        <artifactId>aem-sdk-api</artifactId>
        <version>${aem.sdk.api}</version>
        <scope>provided</scope>
    </dependency>

    <!-- JUnit 5 -->
    <dependency>
        <groupId>org.junit.jupiter</groupId>
        <artifactId>junit-jupiter</artifactId>
        <version>${junit.version}</version>
        <scope>test</scope>
    </dependency>

    <!-- Mockito -->
    <dependency>
        <groupId>org.mockito</groupId>
        <artifactId>mockito-core</artifactId>
        <version>${mockito.version}</version>
        <scope>test</scope>
    </dependency>

    <!-- javax.inject for Sling Models -->
    <dependency>
        <groupId>javax.inject</groupId>
        <artifactId>javax.inject</artifactId>
        <version>1</version>
        <scope>provided</scope>
    </dependency>

    <!-- Sling Models Implementation -->
    <dependency>
        <groupId>org.apache.sling</groupId>
        <artifactId>org.apache.sling.models.impl</artifactId>
        <version>1.6.0</version>
        <scope>test</scope>
    </dependency>
</dependencies>
"#;

pub const CONFIG: &str = r#"
# AEM JUnit Testing - Complete pom.xml Configuration

<project>
    <modelVersion>4.0.0</modelVersion>
    <properties>
        <aem.sdk.api>2025.11.23482.20251120T200914Z-251200</aem.sdk.api>
        <aem-mock.version>5.6.4</aem-mock.version>
        <junit.version>5.11.0</junit.version>
        <mockito.version>5.14.0</mockito.version>
    </properties>
    <dependencies>
        <!-- AEM Mocks (MUST come first) -->
        <dependency>
            <groupId>io.wcm</groupId>
            <artifactId>io.wcm.testing.aem-mock.junit5</artifactId>
            <version>${aem-mock.version}</version>
            <scope>test</scope>
        </dependency>
        
        <dependency>
            <groupId>com.adobe.aem</groupId>
            <artifactId>aem-sdk-api</artifactId>
            <version>${aem.sdk.api}</version>
            <scope>provided</scope>
        </dependency>
        
        <!-- JUnit 5 & Mockito -->
        <dependency>
            <groupId>org.junit.jupiter</groupId>
            <artifactId>junit-jupiter</artifactId>
            <version>${junit.version}</version>
            <scope>test</scope>
        </dependency>
        <dependency>
            <groupId>org.mockito</groupId>
            <artifactId>mockito-core</artifactId>
            <version>${mockito.version}</version>
            <scope>test</scope>
        </dependency>
        <dependency>
            <groupId>org.mockito</groupId>
            <artifactId>mockito-junit-jupiter</artifactId>
            <version>${mockito.version}</version>
            <scope>test</scope>
        </dependency>
        
        <!-- Sling Models -->
        <dependency>
            <groupId>javax.inject</groupId>
            <artifactId>javax.inject</artifactId>
            <version>1</version>
            <scope>provided</scope>
        </dependency>
        <dependency>
            <groupId>org.apache.sling</groupId>
            <artifactId>org.apache.sling.models.impl</artifactId>
            <version>1.6.0</version>
            <scope>test</scope>
        </dependency>
    </dependencies>
    <build>
        <plugins>
            <plugin>
                <groupId>org.apache.maven.plugins</groupId>
                <artifactId>maven-surefire-plugin</artifactId>
                <version>3.5.2</version>
            </plugin>
        </plugins>
    </build>
</project>
"#;

pub const QUICKSTART: &str = r#"
# Quick Start: AEM JUnit Testing

## 1. Add Dependencies

Run: aem-junit-skill config > pom.xml

## 2. Create Test Class

Run: aem-junit-skill template model MyModel > src/test/java/.../MyModelTest.java

## 3. Create Test Content

Create: src/test/resources/com/example/core/models/MyModelTest.json

{
    "jcr:primaryType": "cq:Page",
    "page": {
        "jcr:primaryType": "cq:PageContent",
        "sling:resourceType": "mysite/components/page"
    }
}

## 4. Run Tests

mvn test

## Key Points

- Use @ExtendWith(AemContextExtension.class) for AEM context
- Use ModelFactory.createModel() for Sling Models with injection
- Target 80% code coverage for Cloud Manager
- Use Java 21 for AEM as a Cloud Service

For more: aem-junit-skill guide
"#;

/// Returns every `${name}` property reference in `text`, in order of appearance.
///
/// Used with [`undeclared_properties`] to check that `deps` and `config`
/// output pastes into a pom without dangling Maven properties.
pub fn property_references(text: &str) -> Vec<&str> {
    let mut refs = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                refs.push(&after[..end]);
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    refs
}

/// Returns the `${name}` references in `text` that have no `<name>` property declared.
pub fn undeclared_properties(text: &str) -> Vec<&str> {
    property_references(text)
        .into_iter()
        .filter(|name| !text.contains(&format!("<{}>", name)))
        .collect()
}
