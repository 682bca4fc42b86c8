//! Built-in PHP class-likes.
//!
//! Annotations routinely name classes that ship with PHP itself
//! (`\DateTimeImmutable`, `\Closure`, `\ArrayObject`, …).  Those are never
//! declared in the analyzed project, so the project symbol table is seeded
//! with this list.  Classes from optional extensions can be added through
//! the `known_classes` configuration key.

/// Core and bundled-extension class, interface, trait and enum names,
/// without leading `\`.
pub const BUILTIN_CLASSES: &[&str] = &[
    // Core
    "stdClass",
    "Closure",
    "Generator",
    "WeakReference",
    "WeakMap",
    "Fiber",
    "Attribute",
    "ReturnTypeWillChange",
    "AllowDynamicProperties",
    "SensitiveParameter",
    "Override",
    "SensitiveParameterValue",
    "__PHP_Incomplete_Class",
    // Interfaces
    "Traversable",
    "Iterator",
    "IteratorAggregate",
    "ArrayAccess",
    "Countable",
    "Serializable",
    "Stringable",
    "JsonSerializable",
    "UnitEnum",
    "BackedEnum",
    // Errors and exceptions
    "Throwable",
    "Exception",
    "ErrorException",
    "Error",
    "CompileError",
    "ParseError",
    "TypeError",
    "ArgumentCountError",
    "ValueError",
    "ArithmeticError",
    "DivisionByZeroError",
    "UnhandledMatchError",
    "JsonException",
    "LogicException",
    "BadFunctionCallException",
    "BadMethodCallException",
    "DomainException",
    "InvalidArgumentException",
    "LengthException",
    "OutOfRangeException",
    "RuntimeException",
    "OutOfBoundsException",
    "OverflowException",
    "RangeException",
    "UnderflowException",
    "UnexpectedValueException",
    // Date/time
    "DateTimeInterface",
    "DateTime",
    "DateTimeImmutable",
    "DateTimeZone",
    "DateInterval",
    "DatePeriod",
    // SPL
    "ArrayObject",
    "ArrayIterator",
    "RecursiveArrayIterator",
    "SplStack",
    "SplQueue",
    "SplDoublyLinkedList",
    "SplObjectStorage",
    "SplFixedArray",
    "SplHeap",
    "SplMinHeap",
    "SplMaxHeap",
    "SplPriorityQueue",
    "SplFileInfo",
    "SplFileObject",
    "SplTempFileObject",
    "SplSubject",
    "SplObserver",
    "IteratorIterator",
    "RecursiveIterator",
    "RecursiveIteratorIterator",
    "OuterIterator",
    "SeekableIterator",
    "FilterIterator",
    "CallbackFilterIterator",
    "LimitIterator",
    "InfiniteIterator",
    "NoRewindIterator",
    "AppendIterator",
    "MultipleIterator",
    "EmptyIterator",
    "CachingIterator",
    "RegexIterator",
    "DirectoryIterator",
    "FilesystemIterator",
    "RecursiveDirectoryIterator",
    "GlobIterator",
    // Reflection
    "Reflector",
    "Reflection",
    "ReflectionClass",
    "ReflectionObject",
    "ReflectionMethod",
    "ReflectionFunction",
    "ReflectionFunctionAbstract",
    "ReflectionParameter",
    "ReflectionProperty",
    "ReflectionNamedType",
    "ReflectionUnionType",
    "ReflectionType",
    "ReflectionEnum",
    "ReflectionException",
    // Bundled extensions
    "PDO",
    "PDOStatement",
    "PDOException",
    "DOMDocument",
    "DOMElement",
    "DOMNode",
    "DOMXPath",
    "SimpleXMLElement",
    "XMLReader",
    "XMLWriter",
    "CurlHandle",
    "finfo",
    "IntlDateFormatter",
    "NumberFormatter",
    "Collator",
    "Random\\Randomizer",
];

/// Iterate the builtin names in canonical `\A\B` form.
pub fn builtin_fqsens() -> impl Iterator<Item = String> {
    BUILTIN_CLASSES.iter().map(|name| format!("\\{}", name))
}
