use katalog_convert::convert_to_kotlin;

#[test]
fn plugin_application_converts_end_to_end() {
    assert_eq!(
        convert_to_kotlin("apply plugin: 'kotlin-android'"),
        r#"apply(plugin = "kotlin-android")"#
    );
}

#[test]
fn legacy_compile_scope_converts_without_double_wrapping() {
    assert_eq!(
        convert_to_kotlin("compile ':epoxy-annotations'"),
        r#"implementation(":epoxy-annotations")"#
    );
}

#[test]
fn quote_normalization_feeds_later_rules() {
    assert_eq!(
        convert_to_kotlin("compile 'junit:junit:4.12'"),
        r#"implementation("junit:junit:4.12")"#
    );
}

#[test]
fn realistic_build_script_converts() {
    let input = r#"buildscript {
    ext.kotlin_version = '1.3.50'
    repositories {
        google()
        maven { url 'https://plugins.gradle.org/m2/' }
    }
    dependencies {
        classpath 'org.jetbrains.kotlin:kotlin-gradle-plugin:1.3.50'
    }
}

apply plugin: 'com.android.application'
apply plugin: 'kotlin-android'

android {
    compileSdkVersion 28
    defaultConfig {
        applicationId 'com.example.app'
        minSdkVersion 21
        versionCode 4
    }
    buildTypes {
        release {
            minifyEnabled true
        }
    }
}

dependencies {
    implementation 'androidx.appcompat:appcompat:1.0.2'
    testCompile 'junit:junit:4.12'
}
"#;

    let out = convert_to_kotlin(input);

    assert!(out.contains(r#"extra["kotlin_version"] = "1.3.50""#));
    assert!(out.contains(r#"maven("https://plugins.gradle.org/m2/")"#));
    assert!(out.contains(r#"classpath(kotlin("gradle-plugin", version = "1.3.50"))"#));
    assert!(out.contains(
        "plugins {\n    id(\"com.android.application\")\n    id(\"kotlin-android\")\n}"
    ));
    assert!(out.contains("compileSdkVersion(28)"));
    assert!(out.contains("minSdkVersion(21)"));
    assert!(out.contains(r#"applicationId = "com.example.app""#));
    assert!(out.contains("versionCode = 4"));
    assert!(out.contains("named(\"release\"){"));
    assert!(out.contains("isMinifyEnabled = true"));
    assert!(out.contains(r#"implementation("androidx.appcompat:appcompat:1.0.2")"#));
    assert!(out.contains(r#"testImplementation("junit:junit:4.12")"#));
    assert!(!out.contains("apply plugin:"));
    assert!(!out.contains('\''));
}
